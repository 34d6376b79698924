/// Default and sample section layouts for new rooms
use super::catalog::{SECTIONS_PER_ROOM, STANDARD_DAYS, STANDARD_TIME_SLOTS};
use super::types::{ClassTiming, Section};

/// Hand-authored `(day index, slot index)` pairs for each sample section.
/// Every pair is distinct, so the sample layout never conflicts.
const SAMPLE_LAYOUT: [[(usize, usize); 2]; SECTIONS_PER_ROOM] = [
    [(0, 0), (2, 0)], // Saturday & Monday, 8:00 AM
    [(0, 1), (2, 1)], // Saturday & Monday, 9:30 AM
    [(1, 0), (3, 0)], // Sunday & Tuesday, 8:00 AM
    [(1, 2), (3, 2)], // Sunday & Tuesday, 11:00 AM
    [(4, 3), (5, 4)], // Wednesday 12:30 PM & Thursday 2:00 PM
];

/// Produces the empty layout a room starts with: sections 1 through 5, none
/// of them scheduled yet.
pub fn generate_default_sections() -> Vec<Section> {
    (1..=SECTIONS_PER_ROOM as u32)
        .map(|n| Section::new(n, Vec::new()))
        .collect()
}

/// Produces a fully scheduled layout over the standard catalog, for demos
/// and tests.
pub fn generate_sample_sections() -> Vec<Section> {
    SAMPLE_LAYOUT
        .iter()
        .zip(1u32..)
        .map(|(timings, section_number)| {
            let class_timings = timings
                .iter()
                .map(|&(day, slot)| {
                    let (start, end) = STANDARD_TIME_SLOTS[slot];
                    ClassTiming::new(STANDARD_DAYS[day], start, end)
                })
                .collect();
            Section::new(section_number, class_timings)
        })
        .collect()
}
