//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Store Operations**: Create, Get, List, Action, with the number of observers reached
//! - **Observers**: Connections, disconnections, lagging observers that were cut off
//! - **HTTP**: One span per request via `tower-http`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show submitted payloads and transition requests
//! RUST_LOG=debug cargo run
//!
//! # Only the actor runtime
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Observer connected entity_type="Order" observer=1 observers=1 size=0
//! INFO Created entity_type="Order" id=1717171717171 size=1 delivered=1
//! INFO Action ok entity_type="Order" id=1717171717171 delivered=1
//! ```

/// Initializes the tracing/logging infrastructure for the application.
///
/// Falls back to `info` when `RUST_LOG` is unset.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();
}
