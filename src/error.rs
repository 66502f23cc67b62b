//! Errors raised at the input boundary.
//!
//! Schedule generation itself is infallible; only parsing and
//! validating caller-supplied input can fail.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure to accept a scheduler input.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Malformed JSON, a missing field, or a non-integer count.
    #[error("invalid scheduler input: {0}")]
    Json(#[from] serde_json::Error),
    /// A time-of-day string that is not `HH:MM`.
    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),
    /// The input parsed but failed integrity checks.
    #[error("scheduler input failed validation ({} issue(s))", .0.len())]
    Validation(Vec<ValidationError>),
}

/// Why a time-of-day string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// Not of the form `H:MM` / `HH:MM`.
    #[error("time '{0}' is not in HH:MM format")]
    Format(String),
    /// Hour outside 0..=23.
    #[error("hour {0} is out of range (0-23)")]
    Hour(u32),
    /// Minute outside 0..=59.
    #[error("minute {0} is out of range (0-59)")]
    Minute(u32),
}

impl From<Vec<ValidationError>> for RosterError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}
