//! Constructors and classification helpers for `VerdictError`.

use super::{AggregatedErrors, VerdictError};

impl VerdictError {
    /// Construct the error returned by unwrapping a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::VerdictError;
    /// let e = VerdictError::unwrap_failure("not found");
    /// assert_eq!(e.to_string(), "called unwrap on error: not found");
    /// ```
    #[must_use]
    pub fn unwrap_failure(message: impl Into<String>) -> Self {
        Self::Unwrap {
            message: message.into(),
        }
    }

    /// Construct a type mismatch for the value identified by `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::VerdictError;
    /// let e = VerdictError::type_mismatch("items", "Vec<i32>", "(i32, i32)");
    /// assert_eq!(e.to_string(), "items must be Vec<i32>, got (i32, i32)");
    /// ```
    #[must_use]
    pub fn type_mismatch(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Combine the errors of one batch into a single report.
    ///
    /// No errors yields `None`, one error is returned unchanged, and two or
    /// more become [`Self::Aggregate`] in their original order.
    #[must_use]
    pub(crate) fn collect(mut errors: Vec<Self>) -> Option<Self> {
        if errors.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors))));
        }
        errors.pop()
    }

    /// Returns `true` for [`Self::TypeMismatch`], or for an aggregate made up
    /// solely of type mismatches.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Self::TypeMismatch { .. } => true,
            Self::Aggregate(agg) => !agg.is_empty() && agg.iter().all(Self::is_type_mismatch),
            _ => false,
        }
    }
}
