//! # Actor Framework
//!
//! Building blocks for a single-authority, publish/subscribe actor: one Tokio task owns
//! a collection of entities, applies every mutation in arrival order, and fans the
//! resulting events out to any number of observers.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business rules: how an entity is built,
//!    how it reacts to an action, which event describes the change.
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing, the insertion-ordered
//!    store and the [`ObserverRegistry`].
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication.
//!
//! ## Observers
//!
//! [`ResourceClient::subscribe`] returns a [`Subscription`] whose first message is a
//! snapshot of every entity. Because the snapshot is taken and the observer is
//! registered inside the same iteration of the actor loop, every event published
//! afterwards lands in the subscription after the snapshot, and nothing published
//! before it is repeated.
//!
//! ## Concurrency Model
//!
//! - The actor runs in its own Tokio task
//! - Messages are processed **sequentially** (no locks needed!)
//! - Publishing uses `try_send`, so a slow observer never stalls a mutation; one that
//!   falls a full buffer behind is disconnected and must resubscribe
//! - No shared mutable state (message passing only)
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod registry;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use registry::{ObserverId, ObserverRegistry, Subscription};
