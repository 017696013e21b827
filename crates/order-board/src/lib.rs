//! # Order Board
//!
//! A real-time order board: tables submit orders, and every connected display (kitchen,
//! bar, floor staff) sees the same orders and the same per-dish progress, including
//! displays that connect long after the first order came in.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Order`](model::Order), [`Dish`](model::Dish), their statuses, and the
//! [`BoardEvent`](model::BoardEvent) / [`ObserverRequest`](model::ObserverRequest)
//! messages exchanged with displays.
//!
//! ### 2. The Rules ([`order_actor`])
//! - **Ingestion gate**: [`OrderSubmission`](order_actor::OrderSubmission) validates and
//!   normalises a submission. Admission is all-or-nothing.
//! - **Transition handlers**: the [`ActorEntity`](actor_framework::ActorEntity) impl for
//!   `Order`. Dishes only move Pending -> Completed; completing an order completes all
//!   its dishes; a completed order stays completed.
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderBoardClient`](clients::OrderBoardClient) is the only way to reach the store.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`BoardSystem`](lifecycle::BoardSystem) owns the single order actor of the process.
//!
//! ### 5. The Transport ([`server`])
//! `POST /orders` for submissions and `GET /ws` for displays.
//!
//! ## 👩‍💻 Concurrency
//!
//! One Tokio task owns every order. It applies one request at a time and publishes the
//! resulting event before it looks at the next request, so no display can ever observe
//! a cascade half-done. Publishing never waits on a display.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run -p order-board -- --port 3000 --static-dir public
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod server;
