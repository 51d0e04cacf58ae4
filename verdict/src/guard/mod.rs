//! Runtime type guard.
//!
//! [`ensure_type`] and [`TypeGuard`] compare a value's concrete type with an
//! expected type and fail with a uniformly formatted
//! [`VerdictError::TypeMismatch`] naming the value, the expected type and the
//! type actually observed. Matching is exact [`TypeId`](std::any::TypeId)
//! equality; nothing is coerced.

mod batch;
mod inspect;
mod label;

use std::{any::Any, borrow::Cow};

use crate::error::{VerdictError, VerdictResult};

pub use batch::TypeChecks;
pub use inspect::Inspect;
pub use label::type_label;

/// Name reported for a value when the caller does not supply one.
pub const DEFAULT_VALUE_NAME: &str = "value";

/// Check that `value` is an `E`, reporting it as `"value"` on mismatch.
///
/// # Errors
///
/// Returns [`VerdictError::TypeMismatch`] when `value` is not an `E`.
///
/// # Examples
///
/// ```
/// use verdict::ensure_type;
///
/// assert!(ensure_type::<i32>(&5).is_ok());
/// let err = ensure_type::<i32>(&"5").unwrap_err();
/// assert_eq!(err.to_string(), "value must be i32, got &str");
/// ```
pub fn ensure_type<E: Any>(value: &dyn Inspect) -> VerdictResult<()> {
    TypeGuard::new().ensure::<E>(value)
}

/// Check that `value` is an `E`, reporting it as `name` on mismatch.
///
/// # Errors
///
/// Returns [`VerdictError::TypeMismatch`] when `value` is not an `E`.
pub fn ensure_type_named<E: Any>(value: &dyn Inspect, name: &str) -> VerdictResult<()> {
    TypeGuard::new().ensure_named::<E>(value, name)
}

/// Reusable type guard with a configurable default value name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGuard {
    default_name: Cow<'static, str>,
}

impl Default for TypeGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeGuard {
    /// Guard reporting unnamed values as [`DEFAULT_VALUE_NAME`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_name: Cow::Borrowed(DEFAULT_VALUE_NAME),
        }
    }

    /// Guard reporting unnamed values as `name`.
    #[must_use]
    pub fn with_default_name(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            default_name: name.into(),
        }
    }

    /// Name used by [`TypeGuard::ensure`].
    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Check `value` under the guard's default name.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::TypeMismatch`] when `value` is not an `E`.
    pub fn ensure<E: Any>(&self, value: &dyn Inspect) -> VerdictResult<()> {
        self.ensure_named::<E>(value, &self.default_name)
    }

    /// Check `value`, reporting it as `name` on mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::TypeMismatch`] when `value` is not an `E`.
    pub fn ensure_named<E: Any>(&self, value: &dyn Inspect, name: &str) -> VerdictResult<()> {
        self.downcast_named::<E>(value, name).map(|_| ())
    }

    /// Check `value` and return it as an `&E`.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::TypeMismatch`] when `value` is not an `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::TypeGuard;
    ///
    /// let guard = TypeGuard::new();
    /// let items = vec![1, 2, 3];
    /// let checked = guard.downcast_named::<Vec<i32>>(&items, "items")?;
    /// assert_eq!(checked.len(), 3);
    /// # Ok::<(), verdict::VerdictError>(())
    /// ```
    pub fn downcast_named<'a, E: Any>(
        &self,
        value: &'a dyn Inspect,
        name: &str,
    ) -> VerdictResult<&'a E> {
        value
            .as_any()
            .downcast_ref::<E>()
            .ok_or_else(|| mismatch::<E>(value, name))
    }

    /// Start a batch that records every mismatch instead of stopping at the
    /// first.
    pub const fn checks(&self) -> TypeChecks<'_> {
        TypeChecks::new(self)
    }
}

fn mismatch<E: Any>(value: &dyn Inspect, name: &str) -> VerdictError {
    let expected = type_label::<E>();
    let actual = value.type_label();
    tracing::debug!(%name, %expected, %actual, "type guard rejected value");
    VerdictError::type_mismatch(name, expected, actual)
}
