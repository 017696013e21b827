//! In-process tests for the order-board HTTP endpoints.
//!
//! The router is driven through `tower::ServiceExt::oneshot`; no socket is bound.
//! The order actor behind it is real.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use order_board::clients::ActorClient;
use order_board::config::BoardConfig;
use order_board::lifecycle::BoardSystem;
use order_board::model::{BoardEvent, OrderId};
use order_board::server::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt; // oneshot

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_router(system: &BoardSystem) -> axum::Router {
    build_router(AppState::new(system.board_client.clone()), None)
}

async fn call(router: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    let json = serde_json::from_slice(&body).expect("body is not valid JSON");
    (status, json)
}

fn post_order(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get_orders() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/orders")
        .body(Body::empty())
        .unwrap()
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_returns_200_with_order_id() {
    let system = BoardSystem::new(&BoardConfig::default());
    let router = make_router(&system);
    let mut display = system.board_client.subscribe().await.unwrap();
    display.events.recv().await.unwrap();

    let body = json!({"table": "5", "items": [{"id": 1, "name": "soup"}]}).to_string();
    let (status, json) = call(router, post_order(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);

    let id = OrderId(json["id"].as_u64().expect("id is not a number"));
    match display.events.recv().await.unwrap() {
        BoardEvent::NewOrder(order) => {
            assert_eq!(order.id, id);
            assert_eq!(order.table, "5");
        }
        other => panic!("expected NewOrder, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_invalid_order_returns_400() {
    let system = BoardSystem::new(&BoardConfig::default());
    let router = make_router(&system);

    let body = json!({"table": "5", "items": []}).to_string();
    let (status, json) = call(router, post_order(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
    assert!(json["error"].as_str().unwrap().contains("no dishes"));

    assert!(system.board_client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_unreadable_body_returns_400() {
    let system = BoardSystem::new(&BoardConfig::default());
    let router = make_router(&system);

    let (status, json) = call(router, post_order("{ not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
}

// ---------------------------------------------------------------------------
// GET /orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_orders_in_admission_order() {
    let system = BoardSystem::new(&BoardConfig::default());
    let router = make_router(&system);

    let (status, json) = call(router.clone(), get_orders()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    for table in ["1", "2"] {
        let body = json!({"table": table, "items": [{"id": "a", "name": "tea"}]}).to_string();
        let (status, _) = call(router.clone(), post_order(body)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = call(router, get_orders()).await;
    assert_eq!(status, StatusCode::OK);
    let orders = json.as_array().expect("orders is not an array");
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["table"], "1");
    assert_eq!(orders[1]["table"], "2");
    assert_eq!(orders[0]["status"], "Pending");
    assert_eq!(orders[0]["items"][0]["id"], "a");
    assert_eq!(orders[0]["items"][0]["name"], "tea");
    assert_eq!(orders[0]["items"][0]["status"], "Pending");
}
