//! Type-erased values for the programmatic context bag.
//!
//! Unlike the string-only diagnostic context, context values may be any
//! `'static` type. They are stored behind an [`Arc`] so that snapshots and
//! clones of an error share them instead of copying.

use core::any::{type_name, Any};
use core::fmt;
use std::sync::Arc;

/// A shared, type-erased context value.
///
/// # Examples
///
/// ```
/// use error_shape::ContextValue;
///
/// let value = ContextValue::new(5432_u16);
/// assert_eq!(value.downcast_ref::<u16>(), Some(&5432));
/// assert!(value.downcast_ref::<String>().is_none());
/// assert_eq!(value.type_name(), "u16");
/// ```
#[derive(Clone)]
pub struct ContextValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ContextValue {
    /// Wraps a value of any `'static` type.
    ///
    /// Passing a `ContextValue` returns a clone of it instead of nesting it.
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        if let Some(existing) = (&value as &dyn Any).downcast_ref::<ContextValue>() {
            return existing.clone();
        }
        Self { value: Arc::new(value), type_name: type_name::<T>() }
    }

    /// Returns the value if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns `true` if the value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns the name of the stored type, as reported by [`core::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the underlying shared value.
    #[inline]
    pub fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &*self.value
    }

    /// Renders common scalar and string values as text.
    ///
    /// Returns `None` for any other stored type.
    pub fn to_text(&self) -> Option<String> {
        macro_rules! try_render {
            ($($ty:ty),*) => {
                $(
                    if let Some(v) = self.downcast_ref::<$ty>() {
                        return Some(v.to_string());
                    }
                )*
            };
        }

        try_render!(
            String, &'static str, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64,
            u128, usize, f32, f64
        );
        None
    }
}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Some(text) => write!(f, "{:?}", text),
            None => write!(f, "<{}>", self.type_name),
        }
    }
}
