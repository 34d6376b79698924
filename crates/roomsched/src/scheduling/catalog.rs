//! The catalog of weekly time slots and days that every class timing must
//! draw from.

use super::error::CatalogError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Number of sections every room must have.
pub const SECTIONS_PER_ROOM: usize = 5;

/// Number of class timings every section must have.
pub const TIMINGS_PER_SECTION: usize = 2;

/// The standard daily slots, in chronological order.
pub const STANDARD_TIME_SLOTS: [(&str, &str); 6] = [
    ("8:00 AM", "9:20 AM"),
    ("9:30 AM", "10:50 AM"),
    ("11:00 AM", "12:20 PM"),
    ("12:30 PM", "1:50 PM"),
    ("2:00 PM", "3:20 PM"),
    ("3:30 PM", "4:50 PM"),
];

/// The standard teaching week.
pub const STANDARD_DAYS: [&str; 6] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
];

const TIME_FORMAT: &str = "%I:%M %p";

/// A single start/end pair in the daily catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start_time, self.end_time)
    }
}

/// Immutable set of time slots and days used to validate class timings.
///
/// Built once at startup and shared read-only. Use [`ScheduleCatalog::standard`]
/// for the stock six-slot, six-day week, or [`ScheduleCatalog::load_from_file`]
/// to substitute a different one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCatalog {
    time_slots: Vec<TimeSlot>,
    days: Vec<String>,
}

impl ScheduleCatalog {
    /// Creates a catalog after checking that it is well formed.
    pub fn new(time_slots: Vec<TimeSlot>, days: Vec<String>) -> Result<Self, CatalogError> {
        let catalog = Self { time_slots, days };
        catalog.check()?;
        Ok(catalog)
    }

    /// The stock catalog: six slots from 8:00 AM to 4:50 PM, Saturday through
    /// Thursday.
    pub fn standard() -> Self {
        Self {
            time_slots: STANDARD_TIME_SLOTS
                .iter()
                .map(|(start, end)| TimeSlot::new(*start, *end))
                .collect(),
            days: STANDARD_DAYS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Loads a catalog from a JSON file of the form
    /// `{ "timeSlots": [{ "startTime": .., "endTime": .. }], "days": [..] }`.
    ///
    /// # Arguments
    /// * `path` - Path to the catalog JSON file
    ///
    /// # Returns
    /// * `Ok(ScheduleCatalog)` - The loaded and checked catalog
    /// * `Err(CatalogError)` - If the file can't be read or parsed, or if the
    ///   slots/days are not usable
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog: ScheduleCatalog = serde_json::from_str(&content)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Checks that slots are non-empty, parseable, chronological and
    /// non-overlapping, and that days are unique.
    fn check(&self) -> Result<(), CatalogError> {
        if self.time_slots.is_empty() {
            return Err(CatalogError::NoTimeSlots);
        }
        if self.days.is_empty() {
            return Err(CatalogError::NoDays);
        }

        let mut previous_end: Option<NaiveTime> = None;
        for slot in &self.time_slots {
            let start = parse_time(&slot.start_time)?;
            let end = parse_time(&slot.end_time)?;

            if end <= start {
                return Err(CatalogError::EmptySlot {
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                });
            }

            if let Some(prev) = previous_end {
                if start < prev {
                    return Err(CatalogError::OutOfOrder {
                        start_time: slot.start_time.clone(),
                        end_time: slot.end_time.clone(),
                    });
                }
            }
            previous_end = Some(end);
        }

        let mut seen = HashSet::new();
        for day in &self.days {
            if !seen.insert(day.as_str()) {
                return Err(CatalogError::DuplicateDay { day: day.clone() });
            }
        }

        Ok(())
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// All slot start times, in catalog order.
    pub fn start_times(&self) -> Vec<&str> {
        self.time_slots
            .iter()
            .map(|s| s.start_time.as_str())
            .collect()
    }

    /// All slot end times, in catalog order.
    pub fn end_times(&self) -> Vec<&str> {
        self.time_slots.iter().map(|s| s.end_time.as_str()).collect()
    }

    pub fn has_day(&self, day: &str) -> bool {
        self.days.iter().any(|d| d == day)
    }

    pub fn has_start_time(&self, start_time: &str) -> bool {
        self.time_slots.iter().any(|s| s.start_time == start_time)
    }

    pub fn has_end_time(&self, end_time: &str) -> bool {
        self.time_slots.iter().any(|s| s.end_time == end_time)
    }

    /// Returns true if `start_time` and `end_time` appear together as one slot.
    pub fn matches_slot(&self, start_time: &str, end_time: &str) -> bool {
        self.time_slots
            .iter()
            .any(|s| s.start_time == start_time && s.end_time == end_time)
    }
}

impl Default for ScheduleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, CatalogError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| CatalogError::InvalidTime {
        value: value.to_string(),
    })
}
