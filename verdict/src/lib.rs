//! Tagged success/failure values and runtime type guards.
//!
//! The crate provides two small building blocks:
//!
//! - [`Outcome`], a container holding either a value or a failure message,
//!   inspected with [`Outcome::is_ok`]/[`Outcome::is_err`] and extracted with
//!   [`Outcome::unwrap`], which returns a [`VerdictError`] on misuse.
//! - [`ensure_type`] and [`TypeGuard`], which check a value's concrete type
//!   at runtime and report mismatches as
//!   `"{name} must be {expected}, got {actual}"`.
//!
//! Failures are logged through [`tracing`] at `debug` level; the crate never
//! installs a subscriber.
//!
//! ```
//! use verdict::{Outcome, ensure_type_named};
//!
//! let r = Outcome::success(42);
//! assert!(r.is_ok());
//! assert_eq!(r.unwrap()?, 42);
//!
//! let err = ensure_type_named::<Vec<i32>>(&(1, 2, 3), "items").unwrap_err();
//! assert_eq!(err.to_string(), "items must be Vec<i32>, got (i32, i32, i32)");
//! # Ok::<(), verdict::VerdictError>(())
//! ```

mod error;
mod guard;
mod outcome;
mod result_ext;

pub use error::{AggregatedErrors, PartsState, VerdictError, VerdictResult};
pub use guard::{
    DEFAULT_VALUE_NAME, Inspect, TypeChecks, TypeGuard, ensure_type, ensure_type_named,
    type_label,
};
pub use outcome::Outcome;
pub use result_ext::{IntoOutcome, OptionOutcomeExt};
