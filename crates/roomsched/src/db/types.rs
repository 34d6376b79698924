/// Database types for stored rooms
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::scheduling::Section;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbRoom {
    pub room_id: i64,
    pub name: String,
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Errors raised by the room store.
#[derive(Debug, Error)]
pub enum RoomDbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Stored or incoming sections could not be (de)serialized
    #[error("Sections JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A previous holder of the connection lock panicked
    #[error("Database lock poisoned")]
    LockPoisoned,
}
