//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource must satisfy to be owned by a
//! [`ResourceActor`](crate::ResourceActor). It names the identifier, the creation
//! payload, the custom actions and the event type the actor publishes to its observers.
//!
//! # Architecture Note
//! The actor only knows *when* to mutate and publish. *What* a creation or an action
//! means, and what event it produces, lives here with the entity. This keeps the
//! message loop written once and the business rules testable without spawning tasks.
//!
//! # Atomicity
//! [`ActorEntity::handle_action`] returning `Err` must leave the entity untouched.
//! The actor publishes nothing for a failed action, so a half-applied mutation would
//! be visible in later snapshots without ever having been announced.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// We use "Associated Types" to enforce type safety: an `Order` actor only accepts
/// order creation payloads and order actions, and only ever publishes order events.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Debug;

    /// Enum representing resource-specific mutations.
    type Action: Send + Debug;

    /// The notification published to observers after every successful mutation,
    /// and used to carry the snapshot sent to a newly subscribed observer.
    type Event: Clone + Send + Sync + Debug + 'static;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned ID and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The event announcing that this entity was just created.
    fn created_event(&self) -> Self::Event;

    /// Apply a custom action and return the event describing it.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::Event, Self::Error>;

    /// Wrap independent copies of every stored entity, in insertion order.
    fn snapshot_event(entities: Vec<Self>) -> Self::Event;
}
