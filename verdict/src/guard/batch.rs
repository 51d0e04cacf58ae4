//! Batch type checks that report every mismatch at once.

use std::any::Any;

use super::{Inspect, TypeGuard};
use crate::error::{VerdictError, VerdictResult};

/// Accumulates type mismatches across several checks.
///
/// Created by [`TypeGuard::checks`]. Mismatches are kept in call order and
/// surface from [`TypeChecks::finish`].
///
/// # Examples
///
/// ```
/// use verdict::{TypeGuard, VerdictError};
///
/// let guard = TypeGuard::new();
/// let err = guard
///     .checks()
///     .check::<u16>(&"8080", "port")
///     .check::<String>(&String::from("localhost"), "host")
///     .check::<bool>(&1, "verbose")
///     .finish()
///     .unwrap_err();
/// assert!(matches!(err, VerdictError::Aggregate(ref agg) if agg.len() == 2));
/// ```
#[derive(Debug)]
#[must_use = "call `finish` to observe recorded mismatches"]
pub struct TypeChecks<'g> {
    guard: &'g TypeGuard,
    errors: Vec<VerdictError>,
}

impl<'g> TypeChecks<'g> {
    pub(super) const fn new(guard: &'g TypeGuard) -> Self {
        Self {
            guard,
            errors: Vec::new(),
        }
    }

    /// Check `value` under the guard's default name.
    pub fn check_unnamed<E: Any>(self, value: &dyn Inspect) -> Self {
        let name = self.guard.default_name().to_owned();
        self.check::<E>(value, &name)
    }

    /// Check `value`, recording a mismatch under `name`.
    pub fn check<E: Any>(mut self, value: &dyn Inspect, name: &str) -> Self {
        if let Err(err) = self.guard.ensure_named::<E>(value, name) {
            self.errors.push(err);
        }
        self
    }

    /// Number of mismatches recorded so far.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.errors.len()
    }

    /// Finish the batch.
    ///
    /// # Errors
    ///
    /// Returns the single mismatch when exactly one check failed, or
    /// [`VerdictError::Aggregate`] holding every mismatch in call order when
    /// several did.
    pub fn finish(self) -> VerdictResult<()> {
        VerdictError::collect(self.errors).map_or(Ok(()), Err)
    }
}
