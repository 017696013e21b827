//! Error types for the Order actor.

use crate::model::{DishId, OrderId, OrderStatus};
use thiserror::Error;

/// Errors raised by the order entity itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The submission is malformed or incomplete. Nothing was admitted.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// The addressed order exists but has no dish with this id.
    #[error("Order {order} has no dish {dish}")]
    UnknownDish { order: OrderId, dish: DishId },

    /// The order cannot leave its current status for the requested one.
    #[error("Order {order} cannot move from {from} to {to}")]
    IllegalTransition {
        order: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
}

impl OrderError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        OrderError::InvalidOrder(reason.into())
    }
}
