//! Value-transforming helpers on `Outcome`.

use super::Outcome;

impl<T> Outcome<T> {
    /// Borrow the value without consuming the outcome.
    ///
    /// A failure message is cloned into the returned outcome, so calling this
    /// on a failure allocates. Use [`Outcome::value`] or [`Outcome::error`]
    /// to inspect either side without allocating.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(message) => Outcome::Failure(message.clone()),
        }
    }

    /// Transform the value of a successful outcome.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Rewrite the message of a failed outcome.
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(message) => Self::Failure(f(message)),
        }
    }

    /// Chain another fallible step onto a successful outcome.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Return the value, or `default` for a failure.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Return the value, or compute one from the failure message.
    #[must_use]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => f(message),
        }
    }

    /// Convert into a standard [`Result`] with the message as the error.
    ///
    /// # Errors
    ///
    /// Returns the stored message when the outcome is a failure.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }
}
