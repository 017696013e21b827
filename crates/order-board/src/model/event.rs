//! Messages exchanged with observers.
//!
//! Both directions use adjacently tagged JSON:
//!
//! ```text
//! server -> observer  {"event": "DishCompleted", "data": {"idOrder": 1712, "idDish": 1}}
//! observer -> server  {"request": "ChangeOrderStatus", "data": {"idOrder": 1712, "newStatus": "Completed"}}
//! ```

use crate::model::{DishId, Order, OrderId, OrderStatus};
use serde::{Deserialize, Serialize};

/// Address of one dish inside one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRef {
    pub id_order: OrderId,
    pub id_dish: DishId,
}

/// Request to move an order to `new_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub id_order: OrderId,
    pub new_status: OrderStatus,
}

/// Everything the board pushes to its observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum BoardEvent {
    /// Sent once, first, to every newly connected observer.
    CurrentOrders(Vec<Order>),
    NewOrder(Order),
    DishCompleted(DishRef),
    OrderStatusChanged(Order),
}

impl BoardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BoardEvent::CurrentOrders(_) => "CurrentOrders",
            BoardEvent::NewOrder(_) => "NewOrder",
            BoardEvent::DishCompleted(_) => "DishCompleted",
            BoardEvent::OrderStatusChanged(_) => "OrderStatusChanged",
        }
    }
}

/// Transition requests an observer may send back over its channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", content = "data")]
pub enum ObserverRequest {
    CompleteDish(DishRef),
    ChangeOrderStatus(StatusChange),
}
