use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::scheduling::ConflictRecord;

/// JSON error body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiErrorType {
    #[serde(skip)]
    status: StatusCode,
    error: String,
    details: Option<String>,
    /// Validation messages, verbatim
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conflicts: Vec<ConflictRecord>,
}

impl ApiErrorType {
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_conflicts(mut self, conflicts: Vec<ConflictRecord>) -> Self {
        self.conflicts = conflicts;
        self
    }
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, error, details): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            status,
            error: error.to_string(),
            details,
            errors: Vec::new(),
            conflicts: Vec::new(),
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
