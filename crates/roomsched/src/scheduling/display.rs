use super::types::{Section, SectionDisplay};

/// Projects sections into "<day> <startTime> - <endTime>" lines for display.
pub fn format_sections_for_display(sections: &[Section]) -> Vec<SectionDisplay> {
    sections
        .iter()
        .map(|section| SectionDisplay {
            section: section.section_number,
            classes: section.class_timings.iter().map(|t| t.label()).collect(),
        })
        .collect()
}
