use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::types::RoomState;

/// GET /health
pub async fn get_health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

/// GET /catalog
/// Returns the time slots and days class timings are checked against
pub async fn get_catalog(State(s): State<Arc<RoomState>>) -> Response {
    (StatusCode::OK, Json(&s.catalog)).into_response()
}
