//! Runtime type information for values passed to the guard.

use std::any::Any;

use super::label::type_label;

/// A value whose concrete type can be checked and named at runtime.
///
/// Implemented for every `'static` type, so any `&T` coerces to
/// `&dyn Inspect`. A `Box<dyn Inspect>` is itself a `'static` type: pass
/// `&*boxed` to check the boxed value rather than the box.
pub trait Inspect: Any {
    /// Short label of the concrete type, as produced by [`type_label`].
    fn type_label(&self) -> String;

    /// View the value as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> Inspect for T {
    fn type_label(&self) -> String {
        type_label::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
