//! Core types for the class schedule planner.
//!
//! This crate provides the pieces shared by every planner front end:
//! - `catalog` for sections as delivered by the catalog search API
//! - `time_format` for turning raw meeting times into display strings
//! - `selection` for the selected-sections registry and its color palette
//! - `schedule` for projecting a selection onto a weekly calendar

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod palette;
pub mod schedule;
pub mod selection;
pub mod time_format;

pub use catalog::{Day, Identified, MeetingTime, SearchResults, Section};
pub use error::{PlannerError, PlannerResult};
pub use palette::Palette;
pub use selection::{SelectionEntry, SelectionRegistry, Toggled};
pub use time_format::{RawTime, format_time};
