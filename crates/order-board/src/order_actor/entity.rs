//! Transition handlers: the [`ActorEntity`] implementation for [`Order`].
//!
//! Every rule that decides whether a dish or an order may change status lives here.
//! Each handler checks first and mutates second, so a rejected request leaves the
//! order exactly as it was.

use crate::model::{BoardEvent, DishId, DishRef, DishStatus, Order, OrderId, OrderStatus};
use crate::order_actor::{OrderError, OrderSubmission};
use actor_framework::ActorEntity;

/// Mutations an order accepts after admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Pending -> Completed for one dish. Repeating it is harmless.
    CompleteDish(DishId),
    /// Sets the order status, cascading to the dishes on a terminal status.
    ChangeStatus(OrderStatus),
}

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderSubmission;
    type Action = OrderAction;
    type Event = BoardEvent;
    type Error = OrderError;

    /// Admits a submission: Pending order, every dish Pending.
    fn from_create_params(id: OrderId, params: OrderSubmission) -> Result<Self, Self::Error> {
        params.validate()?;
        let OrderSubmission { table, items } = params.normalized();
        Ok(Self {
            id,
            table,
            items,
            status: OrderStatus::Pending,
        })
    }

    fn created_event(&self) -> BoardEvent {
        BoardEvent::NewOrder(self.clone())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<BoardEvent, Self::Error> {
        match action {
            OrderAction::CompleteDish(dish_id) => {
                let order = self.id;
                let dish = self.dish_mut(&dish_id).ok_or_else(|| OrderError::UnknownDish {
                    order,
                    dish: dish_id.clone(),
                })?;
                dish.status = DishStatus::Completed;
                Ok(BoardEvent::DishCompleted(DishRef {
                    id_order: order,
                    id_dish: dish_id,
                }))
            }
            OrderAction::ChangeStatus(next) => {
                if !self.status.can_become(next) {
                    return Err(OrderError::IllegalTransition {
                        order: self.id,
                        from: self.status,
                        to: next,
                    });
                }
                self.status = next;
                if next.is_terminal() {
                    for dish in &mut self.items {
                        dish.status = DishStatus::Completed;
                    }
                }
                Ok(BoardEvent::OrderStatusChanged(self.clone()))
            }
        }
    }

    fn snapshot_event(entities: Vec<Self>) -> BoardEvent {
        BoardEvent::CurrentOrders(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dish;
    use serde_json::{json, Map, Value};

    fn payload<const N: usize>(fields: [(&str, Value); N]) -> Map<String, Value> {
        fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn order() -> Order {
        let submission = OrderSubmission::new(
            "5",
            vec![
                Dish::new(DishId::Number(1), payload([("name", json!("soup"))])),
                Dish::new(DishId::Number(2), payload([("name", json!("salad"))])),
            ],
        );
        Order::from_create_params(OrderId(1), submission).unwrap()
    }

    fn status_of(order: &Order, dish: i64) -> DishStatus {
        order.dish(&DishId::Number(dish)).unwrap().status
    }

    #[test]
    fn admission_normalizes_to_pending() {
        let mut completed = Dish::new(DishId::Number(1), Default::default());
        completed.status = DishStatus::Completed;
        let order =
            Order::from_create_params(OrderId(7), OrderSubmission::new("2", vec![completed]))
                .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(status_of(&order, 1), DishStatus::Pending);
        assert_eq!(order.created_event(), BoardEvent::NewOrder(order.clone()));
    }

    #[test]
    fn admission_rejects_empty_orders() {
        let result = Order::from_create_params(OrderId(1), OrderSubmission::new("5", vec![]));
        assert!(matches!(result, Err(OrderError::InvalidOrder(_))));
    }

    #[test]
    fn completing_a_dish_leaves_the_rest_alone() {
        let mut order = order();
        let event = order.handle_action(OrderAction::CompleteDish(DishId::Number(1))).unwrap();

        assert_eq!(
            event,
            BoardEvent::DishCompleted(DishRef {
                id_order: OrderId(1),
                id_dish: DishId::Number(1),
            })
        );
        assert_eq!(status_of(&order, 1), DishStatus::Completed);
        assert_eq!(status_of(&order, 2), DishStatus::Pending);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn completing_a_dish_twice_is_idempotent() {
        let mut order = order();
        let first = order.handle_action(OrderAction::CompleteDish(DishId::Number(1))).unwrap();
        let before = order.clone();
        let second = order.handle_action(OrderAction::CompleteDish(DishId::Number(1))).unwrap();

        assert_eq!(first, second);
        assert_eq!(order, before);
    }

    #[test]
    fn all_dishes_completed_does_not_complete_the_order() {
        let mut order = order();
        order.handle_action(OrderAction::CompleteDish(DishId::Number(1))).unwrap();
        order.handle_action(OrderAction::CompleteDish(DishId::Number(2))).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn unknown_dish_is_rejected_without_change() {
        let mut order = order();
        let before = order.clone();
        let result = order.handle_action(OrderAction::CompleteDish(DishId::Number(9)));

        assert_eq!(
            result,
            Err(OrderError::UnknownDish {
                order: OrderId(1),
                dish: DishId::Number(9),
            })
        );
        assert_eq!(order, before);
    }

    #[test]
    fn terminal_status_cascades_to_every_dish() {
        let mut order = order();
        order.handle_action(OrderAction::CompleteDish(DishId::Number(1))).unwrap();
        let event = order
            .handle_action(OrderAction::ChangeStatus(OrderStatus::Completed))
            .unwrap();

        assert_eq!(order.status, OrderStatus::Completed);
        assert!(order.items.iter().all(Dish::is_completed));
        assert_eq!(event, BoardEvent::OrderStatusChanged(order.clone()));
    }

    #[test]
    fn non_terminal_status_does_not_touch_dishes() {
        let mut order = order();
        order
            .handle_action(OrderAction::ChangeStatus(OrderStatus::Preparing))
            .unwrap();

        assert_eq!(order.status, OrderStatus::Preparing);
        assert!(!order.items.iter().any(Dish::is_completed));
    }

    #[test]
    fn completed_order_cannot_reopen() {
        let mut order = order();
        order
            .handle_action(OrderAction::ChangeStatus(OrderStatus::Completed))
            .unwrap();
        let before = order.clone();

        let result = order.handle_action(OrderAction::ChangeStatus(OrderStatus::Pending));
        assert!(matches!(result, Err(OrderError::IllegalTransition { .. })));
        assert_eq!(order, before);

        // Re-completing is allowed and changes nothing.
        order
            .handle_action(OrderAction::ChangeStatus(OrderStatus::Completed))
            .unwrap();
        assert_eq!(order, before);
    }
}
