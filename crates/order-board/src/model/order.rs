//! Orders and their dishes.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//! The transition rules live in [`crate::order_actor::entity`].

use crate::model::{DishStatus, OrderStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Type-safe identifier for Orders.
///
/// Derived from the admission time in milliseconds, but only uniqueness is relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Produces clock-derived order ids that never repeat within the process.
///
/// When two admissions land in the same millisecond (or the clock steps back) the
/// id is bumped past the previous one.
pub fn order_ids() -> impl FnMut() -> OrderId + Send + 'static {
    let mut last: u64 = 0;
    move || {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        last = now.max(last + 1);
        OrderId(last)
    }
}

/// Identifier of a dish, supplied by the submitter and unique only within its order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DishId {
    Number(i64),
    Text(String),
}

impl From<i64> for DishId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DishId::Number(n) => write!(f, "{n}"),
            DishId::Text(s) => f.write_str(s),
        }
    }
}

/// One line item within an order.
///
/// Everything the submitter sent besides `id` (name, quantity, notes...) is kept
/// verbatim in `payload` and flattened back out on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub status: DishStatus,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Dish {
    pub fn new(id: impl Into<DishId>, payload: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            status: DishStatus::Pending,
            payload,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == DishStatus::Completed
    }
}

/// One table's submitted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table: String,
    pub items: Vec<Dish>,
    pub status: OrderStatus,
}

impl Order {
    pub fn dish(&self, id: &DishId) -> Option<&Dish> {
        self.items.iter().find(|d| &d.id == id)
    }

    pub fn dish_mut(&mut self, id: &DishId) -> Option<&mut Dish> {
        self.items.iter_mut().find(|d| &d.id == id)
    }
}
