//! # Generic Messages
//!
//! This module defines the request types exchanged between the `ResourceClient`
//! and the `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::registry::{ObserverId, Subscription};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// There is deliberately no `Update` or `Delete`: entities are created once and then
/// only mutated through their own [`ActorEntity::Action`] enum, which is where the
/// entity enforces its state machine.
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to admit a new resource.
/// - **Get / List**: Retrieval of one entity, or of all of them in insertion order.
/// - **Action**: State mutation through a custom [`ActorEntity::Action`].
/// - **Subscribe / Unsubscribe**: Observer connection lifecycle.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::Event>,
    },
    Subscribe {
        respond_to: Response<Subscription<T::Event>>,
    },
    Unsubscribe {
        observer: ObserverId,
    },
}
