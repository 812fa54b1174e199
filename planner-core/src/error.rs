//! Error types for the planner.

use thiserror::Error;

/// Errors that can occur in planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    #[error("Could not parse search results: {0}")]
    ResultsParse(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
