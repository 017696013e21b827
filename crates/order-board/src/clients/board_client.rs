//! # Order Board Client
//!
//! The only way into the order store: admission through the ingestion gate, and the
//! two transition requests. It wraps a `ResourceClient<Order>` and applies the
//! configured [`UnknownTargetPolicy`].
use crate::config::UnknownTargetPolicy;
use crate::error::BoardError;
use crate::model::{BoardEvent, DishId, ObserverRequest, Order, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderSubmission};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Transition methods return `Ok(Some(event))` with the event that was published,
/// or `Ok(None)` when the request addressed an unknown target and the policy is
/// [`UnknownTargetPolicy::Ignore`].
#[derive(Clone)]
pub struct OrderBoardClient {
    inner: ResourceClient<Order>,
    unknown_targets: UnknownTargetPolicy,
}

impl OrderBoardClient {
    pub fn new(inner: ResourceClient<Order>, unknown_targets: UnknownTargetPolicy) -> Self {
        Self {
            inner,
            unknown_targets,
        }
    }

    /// Validates a raw submission and admits it.
    #[instrument(skip(self, candidate))]
    pub async fn submit_order(&self, candidate: Value) -> Result<OrderId, BoardError> {
        debug!(%candidate, "submit_order called");
        let submission = OrderSubmission::try_from(candidate)?;
        self.admit(submission).await
    }

    /// Admits an already-typed submission.
    #[instrument(skip(self, submission), fields(table = %submission.table))]
    pub async fn admit(&self, submission: OrderSubmission) -> Result<OrderId, BoardError> {
        submission.validate()?;
        let id = self.inner.create(submission).await?;
        info!(%id, "Order admitted");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn complete_dish(
        &self,
        order: OrderId,
        dish: DishId,
    ) -> Result<Option<BoardEvent>, BoardError> {
        let result = self
            .inner
            .perform_action(order, OrderAction::CompleteDish(dish))
            .await;
        self.absorb_unknown(result)
    }

    #[instrument(skip(self))]
    pub async fn change_order_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Option<BoardEvent>, BoardError> {
        let result = self
            .inner
            .perform_action(order, OrderAction::ChangeStatus(status))
            .await;
        self.absorb_unknown(result)
    }

    /// Dispatches a transition request received from an observer.
    pub async fn apply(&self, request: ObserverRequest) -> Result<Option<BoardEvent>, BoardError> {
        match request {
            ObserverRequest::CompleteDish(target) => {
                self.complete_dish(target.id_order, target.id_dish).await
            }
            ObserverRequest::ChangeOrderStatus(change) => {
                self.change_order_status(change.id_order, change.new_status)
                    .await
            }
        }
    }

    fn absorb_unknown(
        &self,
        result: Result<BoardEvent, FrameworkError>,
    ) -> Result<Option<BoardEvent>, BoardError> {
        match result.map_err(BoardError::from) {
            Ok(event) => Ok(Some(event)),
            Err(BoardError::UnknownTarget(target))
                if self.unknown_targets == UnknownTargetPolicy::Ignore =>
            {
                debug!(%target, "Ignoring transition on unknown target");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderBoardClient {
    type Error = BoardError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
