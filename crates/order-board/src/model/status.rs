use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Per-dish progress. A dish only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishStatus {
    #[default]
    Pending,
    Completed,
}

/// Order-level aggregate status, stored independently from the dish statuses.
///
/// `Completed` is the only terminal status. Moving an order into it completes every
/// dish; once there, the order can only be re-completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Completed,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Whether an order currently in `self` may be moved to `next`.
    pub fn can_become(self, next: OrderStatus) -> bool {
        !self.is_terminal() || next.is_terminal()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Completed => "Completed",
        };
        f.write_str(name)
    }
}
