//! Free entry points that start a builder or build an error in one call.
//!
//! # Examples
//!
//! ```
//! use error_shape::{code, wrap};
//!
//! let plain = std::io::Error::other("timeout");
//! let err = wrap(plain, "query failed");
//! assert_eq!(err.to_string(), "query failed; caused by: timeout");
//!
//! let err = code("QUERY_ERR").with_sdc("trace_id", "t1").error("query failed");
//! assert_eq!(err.code().as_str(), "QUERY_ERR");
//! ```

use super::ErrorBuilder;
use crate::types::{Code, StructuredError};
use core::any::Any;
use std::error::Error;
use std::fmt;

/// Starts a builder with an explicit message.
#[inline]
pub fn message<S: Into<String>>(message: S) -> ErrorBuilder {
    ErrorBuilder::new().with_message(message)
}

/// Starts a builder with an error code.
#[inline]
pub fn code<C: Into<Code>>(code: C) -> ErrorBuilder {
    ErrorBuilder::new().with_code(code)
}

/// Starts a builder with stack capture explicitly enabled.
#[inline]
pub fn stack_trace() -> ErrorBuilder {
    ErrorBuilder::new().with_stack_trace(true)
}

/// Starts a builder with one context entry.
#[inline]
pub fn context<K, V>(key: K, value: V) -> ErrorBuilder
where
    K: Into<String>,
    V: Any + Send + Sync,
{
    ErrorBuilder::new().with_context(key, value)
}

/// Starts a builder with one structured diagnostic context entry.
#[inline]
pub fn sdc<K, V>(key: K, value: V) -> ErrorBuilder
where
    K: Into<String>,
    V: Into<String>,
{
    ErrorBuilder::new().with_sdc(key, value)
}

/// Builds a default-configured error with the given message and no cause.
#[inline(never)]
pub fn error<S: Into<String>>(message: S) -> StructuredError {
    ErrorBuilder::new().error(message)
}

/// Builds a default-configured error from a formatted message.
///
/// See also the [`errorf!`](crate::errorf) macro.
#[inline(never)]
pub fn errorf(args: fmt::Arguments<'_>) -> StructuredError {
    ErrorBuilder::new().errorf(args)
}

/// Builds a default-configured error wrapping `cause`.
#[inline(never)]
pub fn wrap<E, S>(cause: E, message: S) -> StructuredError
where
    E: Error + Send + Sync + 'static,
    S: Into<String>,
{
    ErrorBuilder::new().wrap(cause, message)
}

/// Builds a default-configured error wrapping `cause`, with a formatted
/// message.
///
/// See also the [`wrapf!`](crate::wrapf) macro.
#[inline(never)]
pub fn wrapf<E>(cause: E, args: fmt::Arguments<'_>) -> StructuredError
where
    E: Error + Send + Sync + 'static,
{
    ErrorBuilder::new().wrapf(cause, args)
}
