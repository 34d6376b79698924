/// Detection of sections double-booked onto the same day and slot
use super::types::{ConflictRecord, ConflictReport, Section};
use std::collections::HashMap;

/// Finds timings claimed by more than one section.
///
/// Sections are scanned in order, and timings in order within each section.
/// The first section to claim a `(day, startTime, endTime)` owns it; every
/// later claim is reported against that first owner, so a three-way collision
/// between sections 1, 2 and 3 yields `[1, 2]` and `[1, 3]`.
///
/// Sections are not validated first.
pub fn check_conflicts(sections: &[Section]) -> ConflictReport {
    let mut owners: HashMap<(&str, &str, &str), u32> = HashMap::new();
    let mut conflicts = Vec::new();

    for section in sections {
        for timing in &section.class_timings {
            let key = (
                timing.day.as_str(),
                timing.start_time.as_str(),
                timing.end_time.as_str(),
            );

            match owners.get(&key) {
                Some(&owner) => conflicts.push(ConflictRecord {
                    time_slot: timing.clone(),
                    conflicting_sections: [owner, section.section_number],
                }),
                None => {
                    owners.insert(key, section.section_number);
                }
            }
        }
    }

    ConflictReport {
        has_conflicts: !conflicts.is_empty(),
        conflicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::catalog::ScheduleCatalog;
    use crate::scheduling::generator::generate_sample_sections;
    use crate::scheduling::types::ClassTiming;
    use crate::scheduling::validator::SectionValidator;

    fn timing(day: &str, start: &str, end: &str) -> ClassTiming {
        ClassTiming::new(day, start, end)
    }

    #[test]
    fn test_sample_has_no_conflicts() {
        let report = check_conflicts(&generate_sample_sections());
        assert!(!report.has_conflicts);
        assert!(report.conflicts.is_empty());
    }

    #[test]
    fn test_two_sections_same_slot() {
        let clash = timing("Saturday", "8:00 AM", "9:20 AM");
        let sections = vec![
            Section::new(1, vec![clash.clone()]),
            Section::new(2, vec![timing("Monday", "9:30 AM", "10:50 AM")]),
            Section::new(3, vec![clash.clone()]),
        ];

        let report = check_conflicts(&sections);
        assert!(report.has_conflicts);
        assert_eq!(
            report.conflicts,
            vec![ConflictRecord {
                time_slot: clash,
                conflicting_sections: [1, 3],
            }]
        );
    }

    #[test]
    fn test_three_way_collision_reports_first_owner() {
        let clash = timing("Sunday", "9:30 AM", "10:50 AM");
        let sections: Vec<Section> = (1..=3)
            .map(|n| Section::new(n, vec![clash.clone()]))
            .collect();

        let report = check_conflicts(&sections);
        let pairs: Vec<[u32; 2]> = report
            .conflicts
            .iter()
            .map(|c| c.conflicting_sections)
            .collect();
        assert_eq!(pairs, vec![[1, 2], [1, 3]]);
    }

    #[test]
    fn test_same_day_different_slot_is_not_a_conflict() {
        let sections = vec![
            Section::new(1, vec![timing("Monday", "8:00 AM", "9:20 AM")]),
            Section::new(2, vec![timing("Monday", "9:30 AM", "10:50 AM")]),
            Section::new(3, vec![timing("Tuesday", "8:00 AM", "9:20 AM")]),
        ];
        assert!(!check_conflicts(&sections).has_conflicts);
    }

    #[test]
    fn test_conflicts_in_valid_layout_name_distinct_sections() {
        let catalog = ScheduleCatalog::standard();
        let mut sections = generate_sample_sections();
        sections[4].class_timings[1] = sections[1].class_timings[0].clone();
        assert!(SectionValidator::new(&catalog)
            .validate_sections(&sections)
            .is_valid);

        let report = check_conflicts(&sections);
        assert!(report.has_conflicts);
        for conflict in &report.conflicts {
            let [a, b] = conflict.conflicting_sections;
            assert_ne!(a, b);
            for n in [a, b] {
                let owner = sections.iter().find(|s| s.section_number == n).unwrap();
                assert!(owner.class_timings.contains(&conflict.time_slot));
            }
        }
    }
}
