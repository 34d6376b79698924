/// Room section scheduling: the slot/day catalog, layout generation,
/// structural validation, conflict detection and display formatting.
mod catalog;
mod conflicts;
mod display;
mod error;
mod generator;
mod types;
mod validator;

pub use catalog::{
    ScheduleCatalog, TimeSlot, SECTIONS_PER_ROOM, STANDARD_DAYS, STANDARD_TIME_SLOTS,
    TIMINGS_PER_SECTION,
};
pub use conflicts::check_conflicts;
pub use display::format_sections_for_display;
pub use error::CatalogError;
pub use generator::{generate_default_sections, generate_sample_sections};
pub use types::*;
pub use validator::SectionValidator;
