//! Room section scheduling service.
//!
//! The [`scheduling`] module holds the core: the slot/day catalog, layout
//! generation, validation and conflict detection. [`db`] stores rooms and
//! [`server`] exposes them over HTTP.

pub mod config;
pub mod db;
pub mod scheduling;
pub mod server;
pub mod types;
