//! Primary error enum for outcome and guard failures.

use std::fmt;

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors raised when an outcome or a type guard is misused.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerdictError {
    /// `unwrap` was called on a failed outcome.
    #[error("called unwrap on error: {message}")]
    Unwrap {
        /// Failure message stored in the outcome.
        message: String,
    },

    /// A value did not have the expected runtime type.
    #[error("{name} must be {expected}, got {actual}")]
    TypeMismatch {
        /// Caller-supplied name identifying the checked value.
        name: String,
        /// Label of the expected type.
        expected: String,
        /// Label of the observed type.
        actual: String,
    },

    /// Two-field construction received both fields or neither.
    #[error("outcome requires exactly one of value or error, got {state}")]
    InvalidParts {
        /// Which invalid combination was supplied.
        state: PartsState,
    },

    /// Several checks failed in one batch.
    #[error("multiple verdict errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

/// Invalid field combinations rejected by [`crate::Outcome::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartsState {
    /// A value and an error were both supplied.
    Both,
    /// Neither a value nor an error was supplied.
    Neither,
}

impl fmt::Display for PartsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => f.write_str("both"),
            Self::Neither => f.write_str("neither"),
        }
    }
}
