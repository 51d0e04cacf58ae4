//! Conversions between `Outcome` and standard `Result`.

use std::fmt::Display;

use super::Outcome;

/// A failed [`Result`] keeps its error's `Display` text as the message.
impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Display,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
