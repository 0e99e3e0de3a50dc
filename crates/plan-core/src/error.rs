//! Error types for plan generation.

use thiserror::Error;

/// Errors that can occur while generating a weekly plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The goals record is structurally malformed.
    #[error("invalid goals: {0}")]
    InvalidGoals(String),

    /// A medicine declared a timing slot that does not exist.
    #[error("unknown medicine timing: {0}")]
    UnknownTiming(String),

    /// A stored plan does not contain one entry per weekday.
    #[error("weekly plan must contain 7 days, found {0}")]
    IncompleteWeek(usize),

    /// A stored plan lists a weekday out of Monday..Sunday order.
    #[error("day {index} of weekly plan should be {expected}, found {found}")]
    MisorderedDay {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for plan operations.
pub type Result<T> = std::result::Result<T, PlanError>;
