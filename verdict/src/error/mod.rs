//! Error types reported by outcomes and type guards.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::{PartsState, VerdictError};

/// Result alias used throughout the crate.
pub type VerdictResult<T> = Result<T, VerdictError>;
