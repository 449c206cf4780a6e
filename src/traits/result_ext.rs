//! Extension trait for wrapping `Result` errors into structured errors.
//!
//! This module provides [`ResultExt`], which turns the usual
//! `.map_err(|e| wrap(e, "..."))` into a single method call.
//!
//! # Examples
//!
//! ```
//! use error_shape::traits::ResultExt;
//! use error_shape::StructuredError;
//!
//! fn load_config() -> Result<String, StructuredError> {
//!     std::fs::read_to_string("config.toml").wrap_err("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration; caused by: "));
//! ```

use crate::builder::ErrorBuilder;
use crate::types::StructuredError;
use std::error::Error;

/// Extension trait for wrapping the error of a `Result` in a
/// [`StructuredError`].
///
/// The original error becomes the cause, so it stays reachable through
/// `source()` and the introspection functions.
///
/// # Examples
///
/// ## Configured wrapping
///
/// ```
/// use error_shape::traits::ResultExt;
/// use error_shape::get_code_string;
///
/// let result: Result<(), std::io::Error> = Err(std::io::Error::other("timeout"));
/// let err = result
///     .wrap_err_as(|b| b.with_code("DB_ERR").with_sdc("trace_id", "t1"), "query failed")
///     .unwrap_err();
///
/// assert_eq!(get_code_string(&err), "DB_ERR");
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error with a fixed fallback message.
    fn wrap_err<S: Into<String>>(self, message: S) -> Result<T, StructuredError>;

    /// Wraps the error with a lazily produced fallback message.
    ///
    /// The closure only runs when the `Result` is an `Err`.
    fn wrap_err_with<F>(self, f: F) -> Result<T, StructuredError>
    where
        F: FnOnce() -> String;

    /// Wraps the error using a builder configured by `configure`.
    ///
    /// `configure` only runs when the `Result` is an `Err`.
    fn wrap_err_as<F, S>(self, configure: F, message: S) -> Result<T, StructuredError>
    where
        F: FnOnce(ErrorBuilder) -> ErrorBuilder,
        S: Into<String>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn wrap_err<S: Into<String>>(self, message: S) -> Result<T, StructuredError> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ErrorBuilder::new().wrap(error, message)),
        }
    }

    #[inline]
    fn wrap_err_with<F>(self, f: F) -> Result<T, StructuredError>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ErrorBuilder::new().wrap(error, f())),
        }
    }

    #[inline]
    fn wrap_err_as<F, S>(self, configure: F, message: S) -> Result<T, StructuredError>
    where
        F: FnOnce(ErrorBuilder) -> ErrorBuilder,
        S: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(configure(ErrorBuilder::new()).wrap(error, message)),
        }
    }
}
