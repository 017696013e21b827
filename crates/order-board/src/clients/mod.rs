//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod board_client;

pub use actor_framework::ActorClient;
pub use board_client::*;
