//! Stateless section tooling: layout templates and dry-run validation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::scheduling::{
    check_conflicts, generate_default_sections, generate_sample_sections, Section,
    SectionValidator,
};
use crate::types::RoomState;

/// Request body carrying a proposed sections value.
#[derive(Debug, Deserialize)]
pub struct SectionsPayload {
    /// Left untyped so malformed layouts reach the validator
    #[serde(default)]
    pub sections: Value,
}

/// GET /sections/default
pub async fn get_default_sections() -> Response {
    (StatusCode::OK, Json(generate_default_sections())).into_response()
}

/// GET /sections/sample
pub async fn get_sample_sections() -> Response {
    (StatusCode::OK, Json(generate_sample_sections())).into_response()
}

/// POST /sections/validate
///
/// Validates a layout without storing it. Conflicts are scanned over every
/// readable section and timing, even if validation failed; `conflicts` is
/// null only when `sections` is not an array.
pub async fn post_validate_sections(
    State(s): State<Arc<RoomState>>,
    Json(payload): Json<SectionsPayload>,
) -> Response {
    info!("POST /sections/validate");

    let validation = SectionValidator::new(&s.catalog).validate(&payload.sections);
    let conflicts = Section::list_from_value(&payload.sections)
        .map(|sections| check_conflicts(&sections));

    (
        StatusCode::OK,
        Json(json!({
            "validation": validation,
            "conflicts": conflicts,
        })),
    )
        .into_response()
}
