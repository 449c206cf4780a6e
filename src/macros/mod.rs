//! Formatting shorthands for the one-shot constructors.
//!
//! - [`macro@crate::errorf`] - builds a default-configured error from a
//!   `format!`-style message.
//! - [`macro@crate::wrapf`] - same, wrapping a cause.
//!
//! Both expand to calls of [`errorf`](crate::errorf()) / [`wrapf`](crate::wrapf())
//! with `format_args!`, so stack capture still starts at the macro's call site.
//!
//! # Examples
//!
//! ```
//! use error_shape::{errorf, wrapf};
//!
//! let attempts = 3;
//! let err = errorf!("gave up after {} attempts", attempts);
//! assert_eq!(err.to_string(), "gave up after 3 attempts");
//!
//! let err = wrapf!(std::io::Error::other("refused"), "connecting to {}:{}", "db", 5432);
//! assert_eq!(err.to_string(), "connecting to db:5432; caused by: refused");
//! ```

/// Builds a [`StructuredError`](crate::StructuredError) from a formatted
/// message, without a cause.
///
/// Accepts the same arguments as `format!`.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::builder::errorf(::core::format_args!($($arg)*))
    };
}

/// Builds a [`StructuredError`](crate::StructuredError) wrapping a cause, from
/// a formatted message.
///
/// The first argument is the cause; the rest are `format!` arguments.
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)*) => {
        $crate::builder::wrapf($cause, ::core::format_args!($($arg)*))
    };
}
