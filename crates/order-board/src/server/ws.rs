//! Observer WebSocket.
//!
//! Each socket is one observer. Outbound frames come from its [`Subscription`], so
//! the `CurrentOrders` snapshot is always the first frame. Inbound frames are
//! transition requests; anything malformed or rejected is logged and dropped and
//! never reaches other observers.

use crate::clients::{ActorClient, OrderBoardClient};
use crate::model::ObserverRequest;
use crate::server::AppState;
use actor_framework::{ObserverId, Subscription};
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, error, info, warn};

/// WebSocket upgrade handler
pub(crate) async fn observer_socket(
    ws: WebSocketUpgrade,
    State(st): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, st.board))
}

async fn handle_socket(socket: WebSocket, board: OrderBoardClient) {
    let Subscription {
        id: observer,
        mut events,
    } = match board.subscribe().await {
        Ok(subscription) => subscription,
        Err(e) => {
            error!(error = %e, "Could not subscribe observer");
            return;
        }
    };
    info!(observer, "Observer socket connected");

    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    debug!(observer, "Event stream closed");
                    break;
                };
                match serde_json::to_string(&event) {
                    Ok(json) => {
                        if sender.send(Message::Text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => error!(observer, error = %e, "Could not encode event"),
                }
            }
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => handle_request(&board, observer, &text).await,
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sender.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        debug!(observer, error = %e, "WebSocket error");
                        break;
                    }
                }
            }
        }
    }

    board.unsubscribe(observer);
    info!(observer, "Observer socket closed");
}

async fn handle_request(board: &OrderBoardClient, observer: ObserverId, text: &str) {
    let request = match serde_json::from_str::<ObserverRequest>(text) {
        Ok(request) => request,
        Err(e) => {
            warn!(observer, error = %e, "Malformed observer request dropped");
            return;
        }
    };
    debug!(observer, ?request, "Observer request");

    match board.apply(request).await {
        Ok(Some(event)) => debug!(observer, event = event.name(), "Observer request applied"),
        Ok(None) => {}
        Err(e) => warn!(observer, error = %e, "Observer request rejected"),
    }
}
