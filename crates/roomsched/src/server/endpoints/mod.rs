pub mod rooms;
pub mod schedule;
pub mod sections;
pub mod status;
