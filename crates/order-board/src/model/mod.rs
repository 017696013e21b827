//! Pure data structures: orders, dishes, statuses and the observer protocol.

pub mod event;
pub mod order;
pub mod status;

pub use event::*;
pub use order::*;
pub use status::*;
