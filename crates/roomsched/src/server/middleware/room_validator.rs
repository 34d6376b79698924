use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::server::types::ApiErrorType;
use crate::types::RoomState;

/// Rejects requests under `/rooms/:room_id` whose room does not exist.
pub async fn validate_room(
    State(s): State<Arc<RoomState>>,
    Path(room_id): Path<i64>,
    req: Request,
    next: Next,
) -> Response {
    match s.room_db.room_exists(room_id) {
        Ok(true) => next.run(req).await,
        Ok(false) => {
            warn!("Room not found: {}", room_id);
            ApiErrorType::from((
                StatusCode::NOT_FOUND,
                "Room not found",
                Some(format!("No room with ID: {}", room_id)),
            ))
            .into_response()
        }
        Err(e) => {
            error!("Failed to look up room {}: {}", room_id, e);
            ApiErrorType::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to look up room",
                Some(e.to_string()),
            ))
            .into_response()
        }
    }
}
