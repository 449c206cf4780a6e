//! The immutable error value produced by [`ErrorBuilder`].
//!
//! A [`StructuredError`] carries:
//! - an explicit message and the message actually rendered by `Display`
//! - an opaque [`Code`]
//! - a programmatic context bag and a string-only diagnostic bag
//! - an optional shared cause
//! - an optional stack capture, symbolized on first access
//!
//! Everything except the stack cache is fixed at construction.

use crate::builder::{ErrorBuilder, ErrorParts};
use crate::types::{CapturedStack, Code, ContextMap, ContextValue, SdcMap, SharedError, StackFrame};

mod traits;

/// Error value with a code, context bags, an optional cause and a lazily
/// resolved stack trace.
///
/// Values are built with [`ErrorBuilder`] or one of the free entry points such
/// as [`message`](crate::message) and [`wrap`](crate::wrap).
///
/// # Examples
///
/// ```
/// use error_shape::{code, StructuredError};
/// use std::error::Error;
///
/// let cause = std::io::Error::other("disk full");
/// let err: StructuredError = code("DB_ERR")
///     .with_context("host", "localhost")
///     .wrap(cause, "write failed");
///
/// assert_eq!(err.to_string(), "write failed; caused by: disk full");
/// assert_eq!(err.message(), "");
/// assert!(err.source().is_some());
/// ```
pub struct StructuredError {
    message: String,
    rendered_message: String,
    code: Code,
    cause: Option<SharedError>,
    stack: CapturedStack,
    context: ContextMap,
    sdc: SdcMap,
}

impl StructuredError {
    /// Starts a fresh builder with default settings.
    #[inline]
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::new()
    }

    /// Binds builder state into an error value.
    #[inline]
    pub fn from_parts(parts: ErrorParts) -> Self {
        Self {
            message: parts.message,
            rendered_message: parts.rendered_message,
            code: parts.code,
            cause: parts.cause,
            stack: parts.stack,
            context: parts.context,
            sdc: parts.sdc,
        }
    }

    /// Returns the error code, empty if none was set.
    #[inline]
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Returns the explicitly configured message.
    ///
    /// This is empty when the error was built without `with_message`, even
    /// though `Display` then shows the fallback message. Use `to_string()` for
    /// the effective text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the message `Display` starts with: the explicit message if one
    /// was set, otherwise the fallback passed to `build`.
    #[inline]
    pub fn rendered_message(&self) -> &str {
        &self.rendered_message
    }

    /// Returns the programmatic context bag. Never absent, possibly empty.
    #[inline]
    pub fn context(&self) -> &ContextMap {
        &self.context
    }

    /// Looks up one context value.
    #[inline]
    pub fn context_value(&self, key: &str) -> Option<&ContextValue> {
        self.context.get(key)
    }

    /// Returns the structured diagnostic context. Never absent, possibly empty.
    #[inline]
    pub fn sdc(&self) -> &SdcMap {
        &self.sdc
    }

    /// Looks up one diagnostic context value.
    #[inline]
    pub fn sdc_value(&self, key: &str) -> Option<&str> {
        self.sdc.get(key).map(String::as_str)
    }

    /// Returns the wrapped cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    /// Returns the call stack recorded at build time.
    ///
    /// The first call symbolizes the capture and caches the frames; later
    /// calls return the cached frames. Frame 0 is the caller of the builder's
    /// terminal method. Empty when capture was disabled.
    #[inline]
    pub fn stack_trace(&self) -> &[StackFrame] {
        self.stack.frames()
    }

    /// Returns `true` if a stack was captured at build time.
    #[inline]
    pub fn has_stack_trace(&self) -> bool {
        self.stack.is_captured()
    }
}
