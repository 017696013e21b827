//! HTTP and WebSocket transport.
//!
//! - `POST /orders` - submit an order (ingestion gate)
//! - `GET /orders` - current orders, in admission order
//! - `GET /ws` - observer channel: snapshot first, then every event; accepts
//!   transition requests
//!
//! Anything else falls through to the optional static directory.

pub mod routes;
pub mod ws;

use crate::clients::OrderBoardClient;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub board: OrderBoardClient,
}

impl AppState {
    pub fn new(board: OrderBoardClient) -> Self {
        Self { board }
    }
}

pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route(
            "/orders",
            get(routes::list_orders).post(routes::submit_order),
        )
        .route("/ws", get(ws::observer_socket))
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}
