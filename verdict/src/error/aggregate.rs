//! Every mismatch recorded by one batch of type checks.

use std::{error::Error, fmt, slice, vec};

use super::VerdictError;

/// Errors collected by [`crate::TypeChecks`], in the order the checks ran.
///
/// Only built for two or more errors; a single failure is reported on its
/// own.
///
/// # Examples
///
/// ```
/// use verdict::{TypeGuard, VerdictError};
///
/// let err = TypeGuard::new()
///     .checks()
///     .check::<u16>(&"8080", "port")
///     .check::<bool>(&1, "verbose")
///     .finish()
///     .unwrap_err();
/// let VerdictError::Aggregate(agg) = err else { panic!("expected aggregate") };
/// assert_eq!(agg.len(), 2);
/// assert_eq!(agg.first().map(ToString::to_string).as_deref(), Some("port must be u16, got &str"));
/// ```
#[derive(Debug)]
pub struct AggregatedErrors {
    errors: Vec<VerdictError>,
}

impl AggregatedErrors {
    pub(crate) const fn new(errors: Vec<VerdictError>) -> Self {
        Self { errors }
    }

    /// The earliest recorded error.
    #[must_use]
    pub fn first(&self) -> Option<&VerdictError> {
        self.errors.first()
    }

    /// Borrow the errors in recording order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> slice::Iter<'_, VerdictError> {
        self.errors.iter()
    }

    /// Number of recorded errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for (number, err) in (1_usize..).zip(&self.errors) {
            write!(f, "{separator}{number}: {err}")?;
            separator = "\n";
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a VerdictError;
    type IntoIter = slice::Iter<'a, VerdictError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = VerdictError;
    type IntoIter = vec::IntoIter<VerdictError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
