//! order-board entry point.
//!
//! Thin on purpose: load configuration, set up tracing, start the order actor, serve
//! HTTP until Ctrl-C, then shut the actor down.

use anyhow::Context;
use clap::Parser;
use order_board::config::BoardConfig;
use order_board::lifecycle::{setup_tracing, BoardSystem};
use order_board::server::{build_router, AppState};
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Dev convenience; production injects env vars directly.
    let _ = dotenvy::from_filename(".env.local");

    let config = BoardConfig::parse();
    setup_tracing();

    let system = BoardSystem::new(&config);

    let app = build_router(
        AppState::new(system.board_client.clone()),
        config.static_dir.as_deref(),
    )
    .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("order-board listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    // Upgraded sockets may still hold clients for a moment.
    match tokio::time::timeout(Duration::from_secs(5), system.shutdown()).await {
        Ok(result) => result.map_err(anyhow::Error::msg)?,
        Err(_) => warn!("Order actor still busy after 5s, exiting anyway"),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
