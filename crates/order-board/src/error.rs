//! Errors surfaced to whoever submitted a request.

use crate::order_actor::OrderError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Client-facing errors. None of them is ever broadcast to observers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    /// Malformed or incomplete submission; the store was not touched.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// A transition addressed an order or dish that does not exist.
    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    /// The addressed order refuses the requested status.
    #[error("Illegal transition: {0}")]
    IllegalTransition(String),

    /// The order actor is not running.
    #[error("Order board unavailable: {0}")]
    Unavailable(String),
}

impl From<OrderError> for BoardError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::InvalidOrder(reason) => BoardError::InvalidOrder(reason),
            OrderError::UnknownDish { .. } => BoardError::UnknownTarget(e.to_string()),
            OrderError::IllegalTransition { .. } => BoardError::IllegalTransition(e.to_string()),
        }
    }
}

impl From<FrameworkError> for BoardError {
    fn from(e: FrameworkError) -> Self {
        if let Some(order_error) = e.entity_error::<OrderError>() {
            return order_error.clone().into();
        }
        match e {
            FrameworkError::NotFound(id) => BoardError::UnknownTarget(format!("order {id}")),
            other => BoardError::Unavailable(other.to_string()),
        }
    }
}
