use crate::clients::OrderBoardClient;
use crate::config::BoardConfig;
use crate::order_actor;
use tracing::{error, info};

/// The runtime orchestrator for the order board.
///
/// `BoardSystem` owns the one order actor of the process and hands out clients to it.
/// Nothing else creates an order store: every admission, transition and subscription
/// goes through [`BoardSystem::board_client`] or one of its clones.
///
/// # Example
///
/// ```ignore
/// let system = BoardSystem::new(&BoardConfig::default());
/// let id = system.board_client.submit_order(json!({"table": "5", "items": [{"id": 1}]})).await?;
/// system.shutdown().await?;
/// ```
pub struct BoardSystem {
    /// Client for interacting with the Order actor
    pub board_client: OrderBoardClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl BoardSystem {
    /// Creates the order actor and spawns it in its own Tokio task.
    pub fn new(config: &BoardConfig) -> Self {
        let (order_actor, order_resource_client) =
            order_actor::new(config.request_buffer, config.observer_buffer);
        let board_client = OrderBoardClient::new(order_resource_client, config.unknown_targets);
        let handle = tokio::spawn(order_actor.run());

        info!(
            request_buffer = config.request_buffer,
            observer_buffer = config.observer_buffer,
            unknown_targets = ?config.unknown_targets,
            "Order board started"
        );
        Self {
            board_client,
            handle,
        }
    }

    /// Gracefully shuts down the actor.
    ///
    /// Dropping the last client closes the request channel; the actor drains what is
    /// already queued and exits its loop. Clones handed out earlier (e.g. to the HTTP
    /// router) must be dropped first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order board...");
        drop(self.board_client);

        if let Err(e) = self.handle.await {
            error!("Order actor task failed: {:?}", e);
            return Err(format!("Order actor task failed: {:?}", e));
        }

        info!("Order board shutdown complete.");
        Ok(())
    }
}
