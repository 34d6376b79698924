//! Structural validation of a room's section layout.
//!
//! Input is untyped JSON so that malformed request payloads can be reported
//! precisely instead of failing deserialization. Every violation is collected;
//! only a non-array input stops validation early.

use super::catalog::{ScheduleCatalog, SECTIONS_PER_ROOM, TIMINGS_PER_SECTION};
use super::types::{section_number_of, Section, ValidationResult};
use serde_json::Value;

/// Checks proposed sections against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SectionValidator<'a> {
    catalog: &'a ScheduleCatalog,
}

impl<'a> SectionValidator<'a> {
    pub fn new(catalog: &'a ScheduleCatalog) -> Self {
        Self { catalog }
    }

    /// Validates a sections payload.
    ///
    /// # Arguments
    /// * `sections` - The proposed `sections` value, as received
    ///
    /// # Returns
    /// A [`ValidationResult`] whose `errors` are in the order they were
    /// found. Never fails.
    pub fn validate(&self, sections: &Value) -> ValidationResult {
        let Some(sections) = sections.as_array() else {
            return ValidationResult::from_errors(vec!["Sections must be an array".to_string()]);
        };

        let mut errors = Vec::new();

        if sections.len() != SECTIONS_PER_ROOM {
            errors.push(format!(
                "Room must have exactly {SECTIONS_PER_ROOM} sections"
            ));
        }

        for (index, section) in sections.iter().enumerate() {
            let position = index + 1;

            if section_number_of(section) != Some(position as u32) {
                errors.push(format!(
                    "Section at position {position} must have sectionNumber {position}"
                ));
            }

            let Some(timings) = section.get("classTimings").and_then(Value::as_array) else {
                errors.push(format!("Section {position}: classTimings must be an array"));
                continue;
            };

            if timings.len() != TIMINGS_PER_SECTION {
                errors.push(format!(
                    "Section {position} must have exactly {TIMINGS_PER_SECTION} class timings"
                ));
            }

            for (timing_index, timing) in timings.iter().enumerate() {
                let label = format!("Section {position}, class timing {}", timing_index + 1);
                self.check_timing(&label, timing, &mut errors);
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Validates already-typed sections through the same checks.
    pub fn validate_sections(&self, sections: &[Section]) -> ValidationResult {
        match serde_json::to_value(sections) {
            Ok(value) => self.validate(&value),
            Err(e) => ValidationResult::from_errors(vec![e.to_string()]),
        }
    }

    fn check_timing(&self, label: &str, timing: &Value, errors: &mut Vec<String>) {
        let day = non_empty_str(timing, "day");
        let start_time = non_empty_str(timing, "startTime");
        let end_time = non_empty_str(timing, "endTime");

        if !day.is_some_and(|d| self.catalog.has_day(d)) {
            errors.push(format!(
                "{label}: invalid day. Must be one of: {}",
                self.catalog.days().join(", ")
            ));
        }

        if !start_time.is_some_and(|t| self.catalog.has_start_time(t)) {
            errors.push(format!(
                "{label}: invalid start time. Must be one of: {}",
                self.catalog.start_times().join(", ")
            ));
        }

        if !end_time.is_some_and(|t| self.catalog.has_end_time(t)) {
            errors.push(format!(
                "{label}: invalid end time. Must be one of: {}",
                self.catalog.end_times().join(", ")
            ));
        }

        // Pairing is checked on its own: two individually valid times can
        // still come from different slots.
        if let (Some(start), Some(end)) = (start_time, end_time) {
            if !self.catalog.matches_slot(start, end) {
                errors.push(format!(
                    "{label}: {start} - {end} is not a valid time slot"
                ));
            }
        }
    }
}

fn non_empty_str<'v>(value: &'v Value, key: &str) -> Option<&'v str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::generator::{generate_default_sections, generate_sample_sections};
    use crate::scheduling::TimeSlot;
    use serde_json::json;

    fn validate(value: Value) -> ValidationResult {
        let catalog = ScheduleCatalog::standard();
        SectionValidator::new(&catalog).validate(&value)
    }

    fn sample_value() -> Value {
        serde_json::to_value(generate_sample_sections()).unwrap()
    }

    #[test]
    fn test_non_array_is_single_error() {
        for input in [
            json!(null),
            json!("sections"),
            json!(5),
            json!({ "sectionNumber": 1 }),
        ] {
            let result = validate(input);
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec!["Sections must be an array"]);
        }
    }

    #[test]
    fn test_sample_sections_are_valid() {
        let catalog = ScheduleCatalog::standard();
        let result = SectionValidator::new(&catalog).validate_sections(&generate_sample_sections());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_default_sections_fail_only_on_timing_count() {
        let catalog = ScheduleCatalog::standard();
        let result =
            SectionValidator::new(&catalog).validate_sections(&generate_default_sections());

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), SECTIONS_PER_ROOM);
        for (i, error) in result.errors.iter().enumerate() {
            assert_eq!(
                error,
                &format!("Section {} must have exactly 2 class timings", i + 1)
            );
        }
    }

    #[test]
    fn test_wrong_count_still_checks_positions() {
        let result = validate(json!([
            { "sectionNumber": 1, "classTimings": [] },
            { "sectionNumber": 5, "classTimings": [] },
        ]));

        assert_eq!(
            result.errors,
            vec![
                "Room must have exactly 5 sections",
                "Section 1 must have exactly 2 class timings",
                "Section at position 2 must have sectionNumber 2",
                "Section 2 must have exactly 2 class timings",
            ]
        );
    }

    #[test]
    fn test_section_number_compared_numerically() {
        let mut sections = sample_value();
        sections[0]["sectionNumber"] = json!(1.0);
        sections[3]["sectionNumber"] = json!(4.0);
        assert!(validate(sections.clone()).is_valid);

        sections[1]["sectionNumber"] = json!(2.5);
        assert_eq!(
            validate(sections).errors,
            vec!["Section at position 2 must have sectionNumber 2"]
        );
    }

    #[test]
    fn test_missing_class_timings_skips_timing_checks() {
        let mut sections = sample_value();
        sections[2]["classTimings"] = json!("Monday");

        let result = validate(sections);
        assert_eq!(
            result.errors,
            vec!["Section 3: classTimings must be an array"]
        );
    }

    #[test]
    fn test_mismatched_pair_is_reported_separately() {
        let mut sections = sample_value();
        sections[0]["classTimings"][1] = json!({
            "day": "Monday",
            "startTime": "8:00 AM",
            "endTime": "10:50 AM",
        });

        let result = validate(sections);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Section 1, class timing 2: 8:00 AM - 10:50 AM is not a valid time slot"]
        );
    }

    #[test]
    fn test_bad_membership_lists_valid_values() {
        let mut sections = sample_value();
        sections[4]["classTimings"][0] = json!({
            "day": "Friday",
            "startTime": "",
            "endTime": "5:00 PM",
        });

        let result = validate(sections);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(
            result.errors[0],
            "Section 5, class timing 1: invalid day. Must be one of: \
             Saturday, Sunday, Monday, Tuesday, Wednesday, Thursday"
        );
        assert!(result.errors[1].starts_with("Section 5, class timing 1: invalid start time."));
        assert!(result.errors[1].ends_with("2:00 PM, 3:30 PM"));
        assert!(result.errors[2].starts_with("Section 5, class timing 1: invalid end time."));
        assert!(result.errors[2].ends_with("3:20 PM, 4:50 PM"));
    }

    #[test]
    fn test_pairing_reported_alongside_membership() {
        let mut sections = sample_value();
        sections[1]["classTimings"][0] = json!({
            "day": "Sunday",
            "startTime": "7:00 AM",
            "endTime": "9:20 AM",
        });

        let result = validate(sections);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("invalid start time"));
        assert_eq!(
            result.errors[1],
            "Section 2, class timing 1: 7:00 AM - 9:20 AM is not a valid time slot"
        );
    }

    #[test]
    fn test_uses_injected_catalog() {
        let catalog = ScheduleCatalog::new(
            vec![TimeSlot::new("9:00 AM", "10:00 AM")],
            vec!["Friday".to_string()],
        )
        .unwrap();
        let timing = json!({ "day": "Friday", "startTime": "9:00 AM", "endTime": "10:00 AM" });
        let sections: Vec<Value> = (1..=5)
            .map(|n| json!({ "sectionNumber": n, "classTimings": [timing, timing] }))
            .collect();

        let result = SectionValidator::new(&catalog).validate(&Value::Array(sections));
        assert!(result.is_valid, "{:?}", result.errors);
    }
}
