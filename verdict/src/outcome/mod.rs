//! Tagged success/failure container.
//!
//! [`Outcome`] holds either a value or a failure message, never both and
//! never neither. Callers inspect it with [`Outcome::is_ok`] and
//! [`Outcome::is_err`] or extract the value with [`Outcome::unwrap`], which
//! reports misuse as a [`VerdictError::Unwrap`] instead of panicking.

mod combinators;
mod conversions;

use crate::error::{PartsState, VerdictError, VerdictResult};

/// The result of an operation that either produced a `T` or failed with a
/// descriptive message.
///
/// # Examples
///
/// ```
/// use verdict::Outcome;
///
/// let found = Outcome::success(42);
/// assert!(found.is_ok());
/// assert_eq!(found.unwrap().ok(), Some(42));
///
/// let missing: Outcome<i32> = Outcome::failure("not found");
/// assert!(missing.is_err());
/// let err = missing.unwrap().unwrap_err();
/// assert!(err.to_string().contains("not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[must_use = "an outcome may be a failure that should be inspected"]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed; the message describes why.
    Failure(String),
}

impl<T> Outcome<T> {
    /// Wrap a successful value.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap a failure message. An empty message is still a failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Build an outcome from separate value and error fields.
    ///
    /// Exactly one of the two must be present: a lone value yields
    /// [`Outcome::Success`] and a lone error yields [`Outcome::Failure`].
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InvalidParts`] when both fields or neither
    /// field is supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::Outcome;
    ///
    /// let ok = Outcome::from_parts(Some(1), None)?;
    /// assert!(ok.is_ok());
    /// assert!(Outcome::<i32>::from_parts(None, None).is_err());
    /// # Ok::<(), verdict::VerdictError>(())
    /// ```
    pub fn from_parts(value: Option<T>, error: Option<String>) -> VerdictResult<Self> {
        match (value, error) {
            (Some(found), None) => Ok(Self::Success(found)),
            (None, Some(message)) => Ok(Self::Failure(message)),
            (Some(_), Some(_)) => Err(VerdictError::InvalidParts {
                state: PartsState::Both,
            }),
            (None, None) => Err(VerdictError::InvalidParts {
                state: PartsState::Neither,
            }),
        }
    }

    /// Split the outcome back into its value and error fields.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<String>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(message) => (None, Some(message)),
        }
    }

    /// Returns `true` when the outcome carries a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when the outcome carries a failure message.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow the value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure message, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message.as_str()),
        }
    }

    /// Extract the value.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::Unwrap`] carrying the stored message verbatim
    /// when the outcome is a failure.
    pub fn unwrap(self) -> VerdictResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => {
                tracing::debug!(error = %message, "unwrap called on failed outcome");
                Err(VerdictError::unwrap_failure(message))
            }
        }
    }
}
