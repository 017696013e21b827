use crate::clients::ActorClient;
use crate::error::BoardError;
use crate::model::OrderId;
use crate::server::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub id: OrderId,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = match &self {
            BoardError::InvalidOrder(_) => StatusCode::BAD_REQUEST,
            BoardError::UnknownTarget(_) => StatusCode::NOT_FOUND,
            BoardError::IllegalTransition(_) => StatusCode::CONFLICT,
            BoardError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        let body = ErrorResponse {
            ok: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

pub(crate) async fn submit_order(
    State(st): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmitResponse>, BoardError> {
    let Json(candidate) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Unreadable order submission");
        BoardError::InvalidOrder(rejection.body_text())
    })?;

    let id = st.board.submit_order(candidate).await?;
    Ok(Json(SubmitResponse { ok: true, id }))
}

// ---------------------------------------------------------------------------
// GET /orders
// ---------------------------------------------------------------------------

pub(crate) async fn list_orders(State(st): State<AppState>) -> Response {
    match st.board.list().await {
        Ok(orders) => (StatusCode::OK, Json(orders)).into_response(),
        Err(e) => e.into_response(),
    }
}
