//! Error types for the scheduling subsystem.
//!
//! Validation and conflict findings are never errors; they are returned as
//! values. These variants only cover loading a catalog that the rest of the
//! subsystem can trust.

use thiserror::Error;

/// Errors that can occur while loading or checking a schedule catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog file: {message}")]
    Io { message: String },

    /// The catalog file is not valid JSON for a catalog
    #[error("Failed to parse catalog: {message}")]
    Parse { message: String },

    /// The catalog has no time slots
    #[error("Catalog must contain at least one time slot")]
    NoTimeSlots,

    /// The catalog has no days
    #[error("Catalog must contain at least one day")]
    NoDays,

    /// A time string is not of the form `H:MM AM|PM`
    #[error("Invalid time '{value}' (expected e.g. \"8:00 AM\")")]
    InvalidTime { value: String },

    /// A slot ends at or before its own start
    #[error("Time slot {start_time} - {end_time} ends before it starts")]
    EmptySlot {
        start_time: String,
        end_time: String,
    },

    /// A slot starts before the previous slot has ended
    #[error("Time slot {start_time} - {end_time} overlaps or precedes the slot before it")]
    OutOfOrder {
        start_time: String,
        end_time: String,
    },

    /// The same day name appears more than once
    #[error("Day '{day}' is listed more than once")]
    DuplicateDay { day: String },
}

impl CatalogError {
    /// Returns true if the file itself was fine but its contents are not a
    /// usable catalog.
    pub fn is_content_error(&self) -> bool {
        !matches!(self, CatalogError::Io { .. } | CatalogError::Parse { .. })
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse {
            message: err.to_string(),
        }
    }
}
