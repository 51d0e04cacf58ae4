//! Extensions bridging standard `Result`/`Option` values and [`Outcome`].
//!
//! - Use [`IntoOutcome::into_outcome`] for any `Result<T, E>` whose error
//!   implements [`Display`]; the error text becomes the failure message.
//! - Use [`OptionOutcomeExt::ok_or_failure`] to turn an absent value into a
//!   failure with an explicit message.
//!
//! # Examples
//!
//! ```
//! use verdict::{IntoOutcome, OptionOutcomeExt, Outcome};
//!
//! let port: Outcome<u16> = "80".parse::<u16>().into_outcome();
//! assert_eq!(port, Outcome::success(80));
//!
//! let missing: Outcome<&str> = None.ok_or_failure("not found");
//! assert_eq!(missing.error(), Some("not found"));
//! ```

use std::fmt::Display;

use crate::Outcome;

/// Convert a fallible value into an [`Outcome`].
pub trait IntoOutcome<T> {
    /// Keep the success value, or record the error's display text.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: Display,
{
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from(self)
    }
}

/// Extension turning an [`Option`] into an [`Outcome`].
pub trait OptionOutcomeExt<T> {
    /// `Some(v)` becomes a success; `None` becomes a failure with `message`.
    fn ok_or_failure(self, message: impl Into<String>) -> Outcome<T>;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    fn ok_or_failure(self, message: impl Into<String>) -> Outcome<T> {
        self.map_or_else(|| Outcome::failure(message), Outcome::success)
    }
}
