//! Trait for normalizing "some error, maybe" inputs.
//!
//! The introspection functions accept anything that can be viewed as an
//! optional `&dyn Error`, so callers can pass concrete errors, trait objects,
//! shared causes or an `Option` of any of those without converting first.
//!
//! # Implementations
//!
//! - `&E` for any concrete `E: Error + 'static`
//! - `&dyn Error` and `&(dyn Error + Send + Sync)`
//! - `&SharedError`, which is viewed as the error it points to
//! - `Option<T>` of any of the above, where `None` means "no error"
//!
//! # Examples
//!
//! ```
//! use error_shape::traits::IntoErrorRef;
//! use std::error::Error;
//!
//! let io = std::io::Error::other("disk full");
//! assert!((&io).into_error_ref().is_some());
//! assert!(None::<&dyn Error>.into_error_ref().is_none());
//! ```
use crate::types::SharedError;
use core::any::Any;
use std::error::Error;

/// Views a value as an optional borrowed error.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be inspected as an error",
    label = "expected a reference to an error or an `Option` of one",
    note = "pass `&err`, `err.as_ref()` for boxed errors, or `None::<&dyn std::error::Error>`"
)]
pub trait IntoErrorRef<'a> {
    fn into_error_ref(self) -> Option<&'a (dyn Error + 'static)>;
}

impl<'a, E> IntoErrorRef<'a> for &'a E
where
    E: Error + 'static,
{
    #[inline]
    fn into_error_ref(self) -> Option<&'a (dyn Error + 'static)> {
        if let Some(shared) = (self as &dyn Any).downcast_ref::<SharedError>() {
            let pointee: &'a (dyn Error + 'static) = &**shared;
            return Some(pointee);
        }
        Some(self as &(dyn Error + 'static))
    }
}

impl<'a> IntoErrorRef<'a> for &'a (dyn Error + 'static) {
    #[inline]
    fn into_error_ref(self) -> Option<&'a (dyn Error + 'static)> {
        Some(self)
    }
}

impl<'a> IntoErrorRef<'a> for &'a (dyn Error + Send + Sync + 'static) {
    #[inline]
    fn into_error_ref(self) -> Option<&'a (dyn Error + 'static)> {
        Some(self as &(dyn Error + 'static))
    }
}

impl<'a, T> IntoErrorRef<'a> for Option<T>
where
    T: IntoErrorRef<'a>,
{
    #[inline]
    fn into_error_ref(self) -> Option<&'a (dyn Error + 'static)> {
        self.and_then(IntoErrorRef::into_error_ref)
    }
}
