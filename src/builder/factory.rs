use super::ErrorParts;
use crate::types::{PlainError, SharedError, StructuredError};
use std::sync::Arc;

/// Assembles the final error value from builder state.
///
/// This is the seam between the builder and the concrete error type: a
/// builder is parameterized by its factory when created, defaulting to
/// [`StructuredFactory`]. Any `Fn(ErrorParts) -> T` closure is a factory too.
///
/// # Examples
///
/// ```
/// use error_shape::{ErrorBuilder, ErrorParts};
///
/// let code = ErrorBuilder::with_factory(|parts: ErrorParts| parts.code)
///     .with_code("DB_ERR")
///     .error("unused");
/// assert_eq!(code.as_str(), "DB_ERR");
/// ```
pub trait ErrorFactory {
    type Output;

    fn assemble(&self, parts: ErrorParts) -> Self::Output;
}

impl<F, T> ErrorFactory for F
where
    F: Fn(ErrorParts) -> T,
{
    type Output = T;

    #[inline]
    fn assemble(&self, parts: ErrorParts) -> T {
        self(parts)
    }
}

/// Produces [`StructuredError`] values. The default factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredFactory;

impl ErrorFactory for StructuredFactory {
    type Output = StructuredError;

    #[inline]
    fn assemble(&self, parts: ErrorParts) -> StructuredError {
        StructuredError::from_parts(parts)
    }
}

/// Degraded construction for builds without a structured error type.
///
/// Returns the cause unchanged when there is one, otherwise a [`PlainError`]
/// carrying the rendered message. Code, context bags and stack are dropped.
///
/// # Examples
///
/// ```
/// use error_shape::{into_shared, ErrorBuilder, FallbackFactory};
/// use std::sync::Arc;
///
/// let cause = into_shared(std::io::Error::other("disk full"));
/// let err = ErrorBuilder::with_factory(FallbackFactory)
///     .with_code("IGNORED")
///     .build(Some(cause.clone()), "write failed");
/// assert!(Arc::ptr_eq(&err, &cause));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackFactory;

impl ErrorFactory for FallbackFactory {
    type Output = SharedError;

    #[inline]
    fn assemble(&self, parts: ErrorParts) -> SharedError {
        match parts.cause {
            Some(cause) => cause,
            None => Arc::new(PlainError::new(parts.rendered_message)),
        }
    }
}
