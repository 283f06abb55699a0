// Domain errors - Error types for the domain layer

use thiserror::Error;

use crate::domain::model::{RemovalInterval, TimeCode};

/// Domain-specific error types
///
/// The first four variants are validation failures raised before anything is
/// handed to the transcoder. `Execution` is the only one that originates
/// outside the core and carries the adapter's diagnostic untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Time text does not match `H:MM:SS[.fff]` or `MM:SS[.fff]`
    #[error("Invalid time '{input}': {reason}. Expected HH:MM:SS.fff or MM:SS.fff")]
    Parse { input: String, reason: String },

    /// Candidate interval is empty or reversed
    #[error("Invalid range: start ({start}) must be before end ({end})")]
    Range { start: TimeCode, end: TimeCode },

    /// Candidate interval intersects one already in the store
    #[error("Interval {candidate} overlaps existing interval {existing}")]
    Overlap {
        candidate: RemovalInterval,
        existing: RemovalInterval,
    },

    /// Processing requested without any interval to remove
    #[error("No chunks to remove: add at least one interval before processing")]
    EmptyIntervalSet,

    /// Transcoder could not be launched or exited unsuccessfully
    #[error("Transcoder failed: {0}")]
    Execution(String),
}

impl DomainError {
    /// Build a parse error for the given input text
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        DomainError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
