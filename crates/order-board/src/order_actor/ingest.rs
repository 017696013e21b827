//! Ingestion gate: turns a raw submission into an admissible [`OrderSubmission`].
//!
//! Admission is all-or-nothing. A candidate is either fully normalised here, or
//! rejected with [`OrderError::InvalidOrder`] before it ever reaches the actor.

use crate::model::{Dish, DishId, DishStatus};
use crate::order_actor::OrderError;
use serde_json::Value;
use std::collections::HashSet;

/// A validated order candidate, ready to be admitted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub table: String,
    pub items: Vec<Dish>,
}

impl OrderSubmission {
    pub fn new(table: impl Into<String>, items: Vec<Dish>) -> Self {
        Self {
            table: table.into(),
            items,
        }
    }

    /// Checks the admission rules that do not depend on the wire format.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.table.trim().is_empty() {
            return Err(OrderError::invalid("table is required"));
        }
        if self.items.is_empty() {
            return Err(OrderError::invalid("order has no dishes"));
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        for dish in &self.items {
            if !seen.insert(&dish.id) {
                return Err(OrderError::invalid(format!("duplicate dish id {}", dish.id)));
            }
        }
        Ok(())
    }

    /// Forces every dish back to `Pending`, whatever the submitter claimed.
    pub(crate) fn normalized(mut self) -> Self {
        for dish in &mut self.items {
            dish.status = DishStatus::Pending;
        }
        self
    }
}

impl TryFrom<Value> for OrderSubmission {
    type Error = OrderError;

    fn try_from(candidate: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = candidate else {
            return Err(OrderError::invalid("submission must be a JSON object"));
        };

        let table = match fields.remove("table") {
            None | Some(Value::Null) => return Err(OrderError::invalid("table is required")),
            Some(Value::String(table)) => table,
            // Table 0 counts as no table.
            Some(Value::Number(table)) if table.as_f64() == Some(0.0) => {
                return Err(OrderError::invalid("table is required"))
            }
            Some(Value::Number(table)) => table.to_string(),
            Some(_) => return Err(OrderError::invalid("table must be a string or a number")),
        };

        let items = match fields.remove("items") {
            None | Some(Value::Null) => return Err(OrderError::invalid("items are required")),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(OrderError::invalid("items must be a sequence")),
        };

        let items = items
            .into_iter()
            .enumerate()
            .map(|(position, item)| dish_from_value(position, item))
            .collect::<Result<Vec<_>, _>>()?;

        let submission = OrderSubmission { table, items };
        submission.validate()?;
        Ok(submission)
    }
}

fn dish_from_value(position: usize, item: Value) -> Result<Dish, OrderError> {
    let Value::Object(mut payload) = item else {
        return Err(OrderError::invalid(format!("dish #{position} must be an object")));
    };

    let id = match payload.remove("id") {
        Some(Value::Number(n)) => n.as_i64().map(DishId::Number),
        Some(Value::String(s)) if !s.is_empty() => Some(DishId::Text(s)),
        _ => None,
    }
    .ok_or_else(|| {
        OrderError::invalid(format!("dish #{position} needs an integer or string id"))
    })?;

    // Admission always starts a dish at Pending.
    payload.remove("status");
    Ok(Dish::new(id, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejects(candidate: Value) -> String {
        match OrderSubmission::try_from(candidate) {
            Err(OrderError::InvalidOrder(reason)) => reason,
            other => panic!("expected InvalidOrder, got {other:?}"),
        }
    }

    #[test]
    fn admits_a_well_formed_submission() {
        let submission = OrderSubmission::try_from(json!({
            "table": "5",
            "items": [{"id": 1, "name": "soup"}, {"id": 2, "name": "salad", "qty": 2}]
        }))
        .unwrap();

        assert_eq!(submission.table, "5");
        assert_eq!(submission.items.len(), 2);
        assert_eq!(submission.items[1].payload["qty"], json!(2));
        assert!(submission.items.iter().all(|d| d.status == DishStatus::Pending));
    }

    #[test]
    fn submitted_dish_status_is_discarded() {
        let submission = OrderSubmission::try_from(json!({
            "table": "1",
            "items": [{"id": "a", "status": "Completed"}]
        }))
        .unwrap();

        let dish = &submission.items[0];
        assert_eq!(dish.status, DishStatus::Pending);
        assert!(!dish.payload.contains_key("status"));
    }

    #[test]
    fn numeric_table_is_kept_as_text() {
        let submission =
            OrderSubmission::try_from(json!({"table": 12, "items": [{"id": 1}]})).unwrap();
        assert_eq!(submission.table, "12");
    }

    #[test]
    fn missing_or_blank_table_is_rejected() {
        rejects(json!({"items": [{"id": 1}]}));
        rejects(json!({"table": null, "items": [{"id": 1}]}));
        rejects(json!({"table": "  ", "items": [{"id": 1}]}));
        rejects(json!({"table": ["5"], "items": [{"id": 1}]}));
        assert_eq!(
            rejects(json!({"table": 0, "items": [{"id": 1}]})),
            "table is required"
        );
    }

    #[test]
    fn text_table_zero_is_a_real_table() {
        let submission =
            OrderSubmission::try_from(json!({"table": "0", "items": [{"id": 1}]})).unwrap();
        assert_eq!(submission.table, "0");
    }

    #[test]
    fn items_must_be_a_non_empty_sequence() {
        rejects(json!({"table": "5"}));
        rejects(json!({"table": "5", "items": {"id": 1}}));
        assert_eq!(rejects(json!({"table": "5", "items": []})), "order has no dishes");
    }

    #[test]
    fn dishes_need_an_id_unique_within_the_order() {
        rejects(json!({"table": "5", "items": ["soup"]}));
        rejects(json!({"table": "5", "items": [{"name": "soup"}]}));
        rejects(json!({"table": "5", "items": [{"id": 1.5}]}));
        assert_eq!(
            rejects(json!({"table": "5", "items": [{"id": 1}, {"id": 1}]})),
            "duplicate dish id 1"
        );
    }

    #[test]
    fn non_object_submission_is_rejected() {
        rejects(json!("table 5, soup"));
    }
}
