//! API endpoints for creating, reading and rescheduling rooms.
//!
//! Every write path runs the proposed sections through the validator and the
//! conflict detector before anything is stored. Sections are always replaced
//! wholesale.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::ConflictPolicy;
use crate::db::{DbRoom, RoomDbError};
use crate::scheduling::{
    check_conflicts, generate_default_sections, generate_sample_sections, ConflictReport,
    Section, SectionValidator,
};
use crate::server::endpoints::sections::SectionsPayload;
use crate::server::types::ApiErrorType;
use crate::types::RoomState;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    /// Omit to start the room with the default (unscheduled) layout
    #[serde(default)]
    pub sections: Option<Value>,
}

/// A stored room, plus any conflicts accepted under the `warn` policy.
#[derive(Debug, Serialize)]
struct RoomResponse<'a> {
    #[serde(flatten)]
    room: &'a DbRoom,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicts: Option<ConflictReport>,
}

impl<'a> RoomResponse<'a> {
    fn new(room: &'a DbRoom, report: Option<ConflictReport>) -> Self {
        Self {
            room,
            conflicts: report.filter(|r| r.has_conflicts),
        }
    }
}

/// Converts a store failure into a 500 response.
fn db_error_to_response(error: RoomDbError, message: &str) -> Response {
    error!("{}: {}", message, error);
    ApiErrorType::from((
        StatusCode::INTERNAL_SERVER_ERROR,
        message,
        Some(error.to_string()),
    ))
    .into_response()
}

fn room_not_found(room_id: i64) -> Response {
    ApiErrorType::from((
        StatusCode::NOT_FOUND,
        "Room not found",
        Some(format!("No room with ID: {}", room_id)),
    ))
    .into_response()
}

/// Fetches a room, mapping absence and store failures to responses.
pub(crate) fn load_room(state: &RoomState, room_id: i64) -> Result<DbRoom, Response> {
    match state.room_db.get_room(room_id) {
        Ok(Some(room)) => Ok(room),
        Ok(None) => Err(room_not_found(room_id)),
        Err(e) => Err(db_error_to_response(e, "Failed to fetch room")),
    }
}

/// Validates a proposed sections value and applies the conflict policy.
///
/// # Returns
/// * `Ok((sections, report))` - Typed sections that may be stored
/// * `Err(Response)` - 400 for structural errors, 409 for conflicts under
///   the `reject` policy
fn check_proposed_sections(
    state: &RoomState,
    proposed: Value,
) -> Result<(Vec<Section>, ConflictReport), Response> {
    let validation = SectionValidator::new(&state.catalog).validate(&proposed);
    if !validation.is_valid {
        warn!(
            "Rejected sections with {} validation error(s)",
            validation.errors.len()
        );
        return Err(ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "Invalid sections",
            None,
        ))
        .with_errors(validation.errors)
        .into_response());
    }

    // Validation guarantees every section and timing is readable; this also
    // normalizes section numbers written as `1.0`.
    let Some(sections) = Section::list_from_value(&proposed) else {
        return Err(ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "Invalid sections",
            None,
        ))
        .into_response());
    };

    let report = check_conflicts(&sections);
    if report.has_conflicts {
        match state.conflict_policy {
            ConflictPolicy::Reject => {
                warn!("Rejected sections with {} conflict(s)", report.conflicts.len());
                return Err(ApiErrorType::from((
                    StatusCode::CONFLICT,
                    "Sections have conflicting timings",
                    None,
                ))
                .with_conflicts(report.conflicts)
                .into_response());
            }
            ConflictPolicy::Warn => {
                warn!("Accepting sections with {} conflict(s)", report.conflicts.len());
            }
        }
    }

    Ok((sections, report))
}

/// GET /rooms
pub async fn get_rooms(State(s): State<Arc<RoomState>>) -> Response {
    info!("GET /rooms");

    match s.room_db.list_rooms() {
        Ok(rooms) => (StatusCode::OK, Json(rooms)).into_response(),
        Err(e) => db_error_to_response(e, "Failed to list rooms"),
    }
}

/// POST /rooms
///
/// Creates a room. Without a `sections` payload the room gets the default
/// layout, which is stored as-is since it is not expected to validate yet.
pub async fn post_room(
    State(s): State<Arc<RoomState>>,
    Json(req): Json<CreateRoomRequest>,
) -> Response {
    info!("POST /rooms (name={})", req.name);

    if req.name.trim().is_empty() {
        return ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "Room name must not be empty",
            None,
        ))
        .into_response();
    }

    let (sections, report) = match req.sections {
        Some(proposed) => match check_proposed_sections(&s, proposed) {
            Ok((sections, report)) => (sections, Some(report)),
            Err(resp) => return resp,
        },
        None => (generate_default_sections(), None),
    };

    match s.room_db.create_room(&req.name, &sections) {
        Ok(room) => {
            info!("Created room {} ({})", room.room_id, room.name);
            (StatusCode::CREATED, Json(RoomResponse::new(&room, report))).into_response()
        }
        Err(e) => db_error_to_response(e, "Failed to create room"),
    }
}

/// GET /rooms/:room_id
pub async fn get_room(Path(room_id): Path<i64>, State(s): State<Arc<RoomState>>) -> Response {
    info!("GET /rooms/{}", room_id);

    match load_room(&s, room_id) {
        Ok(room) => (StatusCode::OK, Json(RoomResponse::new(&room, None))).into_response(),
        Err(resp) => resp,
    }
}

/// DELETE /rooms/:room_id
pub async fn delete_room(Path(room_id): Path<i64>, State(s): State<Arc<RoomState>>) -> Response {
    info!("DELETE /rooms/{}", room_id);

    match s.room_db.delete_room(room_id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => room_not_found(room_id),
        Err(e) => db_error_to_response(e, "Failed to delete room"),
    }
}

/// PUT /rooms/:room_id/sections
///
/// Replaces the room's sections with a validated layout.
pub async fn put_sections(
    Path(room_id): Path<i64>,
    State(s): State<Arc<RoomState>>,
    Json(payload): Json<SectionsPayload>,
) -> Response {
    info!("PUT /rooms/{}/sections", room_id);

    let (sections, report) = match check_proposed_sections(&s, payload.sections) {
        Ok(checked) => checked,
        Err(resp) => return resp,
    };

    replace_and_respond(&s, room_id, &sections, Some(report))
}

/// POST /rooms/:room_id/sections/sample
///
/// Replaces the room's sections with the sample layout.
pub async fn post_sample_sections(
    Path(room_id): Path<i64>,
    State(s): State<Arc<RoomState>>,
) -> Response {
    info!("POST /rooms/{}/sections/sample", room_id);

    replace_and_respond(&s, room_id, &generate_sample_sections(), None)
}

fn replace_and_respond(
    state: &RoomState,
    room_id: i64,
    sections: &[Section],
    report: Option<ConflictReport>,
) -> Response {
    match state.room_db.replace_sections(room_id, sections) {
        Ok(true) => match load_room(state, room_id) {
            Ok(room) => (StatusCode::OK, Json(RoomResponse::new(&room, report))).into_response(),
            Err(resp) => resp,
        },
        Ok(false) => room_not_found(room_id),
        Err(e) => db_error_to_response(e, "Failed to update sections"),
    }
}
