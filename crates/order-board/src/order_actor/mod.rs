//! # Order Actor
//!
//! The single authority over every order admitted during the process lifetime.
//!
//! ## Structure
//!
//! - [`ingest`] - the ingestion gate ([`OrderSubmission`] and its validation)
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Order`], i.e. the transition handlers and the events they publish
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use order_board::clients::OrderBoardClient;
//! use order_board::config::UnknownTargetPolicy;
//! use order_board::model::DishId;
//! use order_board::order_actor;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32, 64);
//!     let client = OrderBoardClient::new(generic_client, UnknownTargetPolicy::Ignore);
//!     tokio::spawn(actor.run());
//!
//!     let id = client
//!         .submit_order(json!({"table": "5", "items": [{"id": 1, "name": "soup"}]}))
//!         .await?;
//!     client.complete_dish(id, DishId::Number(1)).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod ingest;

pub use entity::*;
pub use error::*;
pub use ingest::*;

use crate::model::{order_ids, Order};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(
    buffer_size: usize,
    observer_buffer: usize,
) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, observer_buffer, order_ids())
}
