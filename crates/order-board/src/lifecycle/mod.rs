//! # System Lifecycle
//!
//! Starting, wiring and shutting down the order board.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the request channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Observers see end of stream** - the registry is dropped with the actor
//! 4. **Await completion** - [`BoardSystem::shutdown`] joins the actor task
//!
//! A subscription alone never keeps the actor alive: it holds a receiver, not a client.

pub mod board_system;
pub mod tracing;

pub use self::board_system::*;
pub use self::tracing::setup_tracing;
