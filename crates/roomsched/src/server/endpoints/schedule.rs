use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::scheduling::{check_conflicts, format_sections_for_display};
use crate::server::endpoints::rooms::load_room;
use crate::types::RoomState;

/// GET /rooms/:room_id/schedule
/// Returns the room's sections as display lines
pub async fn get_room_schedule(
    Path(room_id): Path<i64>,
    State(s): State<Arc<RoomState>>,
) -> Response {
    info!("GET /rooms/{}/schedule", room_id);

    match load_room(&s, room_id) {
        Ok(room) => (
            StatusCode::OK,
            Json(format_sections_for_display(&room.sections)),
        )
            .into_response(),
        Err(resp) => resp,
    }
}

/// GET /rooms/:room_id/conflicts
/// Returns any timings claimed by more than one of the room's sections
pub async fn get_room_conflicts(
    Path(room_id): Path<i64>,
    State(s): State<Arc<RoomState>>,
) -> Response {
    info!("GET /rooms/{}/conflicts", room_id);

    match load_room(&s, room_id) {
        Ok(room) => (StatusCode::OK, Json(check_conflicts(&room.sections))).into_response(),
        Err(resp) => resp,
    }
}
