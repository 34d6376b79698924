/// Types for room sections, their weekly timings, and scheduling results
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single weekly meeting of a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTiming {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl ClassTiming {
    pub fn new(
        day: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Renders as "<day> <startTime> - <endTime>".
    pub fn label(&self) -> String {
        format!("{} {} - {}", self.day, self.start_time, self.end_time)
    }
}

/// One of a room's weekly groupings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_number: u32,
    #[serde(default)]
    pub class_timings: Vec<ClassTiming>,
}

impl Section {
    pub fn new(section_number: u32, class_timings: Vec<ClassTiming>) -> Self {
        Self {
            section_number,
            class_timings,
        }
    }

    /// Recovers whatever sections can be read from an untyped payload.
    ///
    /// Sections without an integral `sectionNumber` are skipped, as are
    /// timings missing a string `day`, `startTime` or `endTime`. Returns
    /// `None` only if the payload is not an array.
    pub fn list_from_value(value: &Value) -> Option<Vec<Section>> {
        let sections = value
            .as_array()?
            .iter()
            .filter_map(|section| {
                let section_number = section_number_of(section)?;
                let class_timings = section
                    .get("classTimings")
                    .and_then(Value::as_array)
                    .map(|timings| timings.iter().filter_map(timing_of).collect())
                    .unwrap_or_default();
                Some(Section::new(section_number, class_timings))
            })
            .collect();
        Some(sections)
    }
}

/// Reads `sectionNumber` written as any integral JSON number, so `1` and
/// `1.0` are the same section.
pub(crate) fn section_number_of(section: &Value) -> Option<u32> {
    let number = section.get("sectionNumber")?;
    if let Some(n) = number.as_u64() {
        return u32::try_from(n).ok();
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f as u32)
}

fn timing_of(timing: &Value) -> Option<ClassTiming> {
    let field = |key: &str| timing.get(key).and_then(Value::as_str);
    Some(ClassTiming::new(
        field("day")?,
        field("startTime")?,
        field("endTime")?,
    ))
}

/// Outcome of structural validation. Errors are in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Two sections claiming the same day and slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRecord {
    pub time_slot: ClassTiming,
    /// `[first owner, later claimant]`
    pub conflicting_sections: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub has_conflicts: bool,
    pub conflicts: Vec<ConflictRecord>,
}

/// Human-readable view of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDisplay {
    pub section: u32,
    pub classes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_number_accepts_integral_floats() {
        assert_eq!(section_number_of(&json!({ "sectionNumber": 3 })), Some(3));
        assert_eq!(section_number_of(&json!({ "sectionNumber": 3.0 })), Some(3));
        assert_eq!(section_number_of(&json!({ "sectionNumber": 3.5 })), None);
        assert_eq!(section_number_of(&json!({ "sectionNumber": -1 })), None);
        assert_eq!(section_number_of(&json!({ "sectionNumber": "3" })), None);
        assert_eq!(section_number_of(&json!({})), None);
    }

    #[test]
    fn test_list_from_value_skips_unreadable_parts() {
        let value = json!([
            { "sectionNumber": 1.0, "classTimings": [
                { "day": "Monday", "startTime": "8:00 AM" },
                { "day": "Monday", "startTime": "9:30 AM", "endTime": "10:50 AM" },
            ]},
            { "classTimings": [] },
            { "sectionNumber": 3, "classTimings": "Tuesday" },
        ]);

        assert_eq!(
            Section::list_from_value(&value),
            Some(vec![
                Section::new(
                    1,
                    vec![ClassTiming::new("Monday", "9:30 AM", "10:50 AM")]
                ),
                Section::new(3, Vec::new()),
            ])
        );
        assert_eq!(Section::list_from_value(&json!({ "sections": [] })), None);
    }
}
