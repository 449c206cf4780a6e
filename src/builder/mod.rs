//! Fluent accumulation of error properties.
//!
//! [`ErrorBuilder`] collects a message, a code, context entries and a
//! stack-capture flag, then freezes them into an error value with one of its
//! terminal methods ([`build`](ErrorBuilder::build), [`error`](ErrorBuilder::error),
//! [`wrap`](ErrorBuilder::wrap), ...). The builder never implements
//! `std::error::Error` itself.
//!
//! What the terminal methods produce is decided by the builder's
//! [`ErrorFactory`]. The default, [`StructuredFactory`], yields a
//! [`StructuredError`](crate::StructuredError).
//!
//! # Examples
//!
//! ```
//! use error_shape::ErrorBuilder;
//!
//! let err = ErrorBuilder::new()
//!     .with_code("USER_NOT_FOUND")
//!     .with_context("user_id", 42_u64)
//!     .with_stack_trace(false)
//!     .error("user lookup failed");
//!
//! assert_eq!(err.to_string(), "user lookup failed");
//! assert_eq!(err.context()["user_id"].downcast_ref::<u64>(), Some(&42));
//! assert!(err.stack_trace().is_empty());
//! ```

use crate::types::{into_shared, CapturedStack, Code, ContextMap, ContextValue, SdcMap, SharedError};
use core::any::Any;
use std::fmt;
use std::error::Error;

mod entry;
mod factory;

pub use entry::*;
pub use factory::*;

/// Builder state handed to an [`ErrorFactory`] by the terminal methods.
#[derive(Debug)]
pub struct ErrorParts {
    /// The explicit message, empty if never set.
    pub message: String,
    /// The explicit message if set, otherwise the fallback message.
    pub rendered_message: String,
    pub code: Code,
    pub cause: Option<SharedError>,
    pub stack: CapturedStack,
    pub context: ContextMap,
    pub sdc: SdcMap,
}

/// Mutable, chainable accumulator of error properties.
///
/// Every `with_*` method overwrites earlier values for the same field or key
/// and returns the builder for further chaining. No validation is done:
/// empty keys and empty values are stored as given.
///
/// # Type Parameters
///
/// * `F` - The [`ErrorFactory`] that assembles the final error value
#[must_use]
pub struct ErrorBuilder<F = StructuredFactory> {
    message: String,
    code: Code,
    capture_stack: bool,
    context: ContextMap,
    sdc: SdcMap,
    factory: F,
}

impl ErrorBuilder {
    /// Creates a builder with stack capture enabled, empty bags and no
    /// message or code.
    #[inline]
    pub fn new() -> Self {
        Self::with_factory(StructuredFactory)
    }
}

impl Default for ErrorBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<F> ErrorBuilder<F> {
    /// Creates a default-configured builder that assembles errors with `factory`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_shape::{ErrorBuilder, FallbackFactory};
    ///
    /// let err = ErrorBuilder::with_factory(FallbackFactory).error("plain failure");
    /// assert_eq!(err.to_string(), "plain failure");
    /// ```
    #[inline]
    pub fn with_factory(factory: F) -> Self {
        Self {
            message: String::new(),
            code: Code::default(),
            capture_stack: true,
            context: ContextMap::new(),
            sdc: SdcMap::new(),
            factory,
        }
    }

    /// Replaces the factory while keeping every configured property.
    #[inline]
    pub fn factory<G>(self, factory: G) -> ErrorBuilder<G> {
        ErrorBuilder {
            message: self.message,
            code: self.code,
            capture_stack: self.capture_stack,
            context: self.context,
            sdc: self.sdc,
            factory,
        }
    }

    /// Sets the explicit message, which takes precedence over any fallback
    /// passed to a terminal method. An empty message counts as unset.
    #[inline]
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the error code.
    #[inline]
    pub fn with_code<C: Into<Code>>(mut self, code: C) -> Self {
        self.code = code.into();
        self
    }

    /// Enables or disables stack capture at build time. Enabled by default.
    #[inline]
    pub fn with_stack_trace(mut self, enabled: bool) -> Self {
        self.capture_stack = enabled;
        self
    }

    /// Stores an arbitrary value in the context bag.
    #[inline]
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Any + Send + Sync,
    {
        self.context.insert(key.into(), ContextValue::new(value));
        self
    }

    /// Stores a string in the structured diagnostic context.
    #[inline]
    pub fn with_sdc<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.sdc.insert(key.into(), value.into());
        self
    }

    /// Returns the explicit message configured so far.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the code configured so far.
    #[inline]
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Returns `true` if the terminal method will capture a stack.
    #[inline]
    pub fn captures_stack(&self) -> bool {
        self.capture_stack
    }

    #[inline]
    pub fn context(&self) -> &ContextMap {
        &self.context
    }

    #[inline]
    pub fn sdc(&self) -> &SdcMap {
        &self.sdc
    }
}

impl<F: ErrorFactory> ErrorBuilder<F> {
    /// Freezes the builder into an error value.
    ///
    /// Captures the call stack first (if enabled), resolves the rendered
    /// message (the explicit message, or `fallback` when none was set) and
    /// hands everything to the factory.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_shape::{into_shared, message};
    ///
    /// let cause = into_shared(std::io::Error::other("disk full"));
    /// let err = message("write failed").build(Some(cause), "ignored fallback");
    /// assert_eq!(err.to_string(), "write failed; caused by: disk full");
    /// ```
    #[inline(never)]
    pub fn build<S>(self, cause: Option<SharedError>, fallback: S) -> F::Output
    where
        S: Into<String>,
    {
        let stack = if self.capture_stack { CapturedStack::capture() } else { CapturedStack::none() };

        let Self { message, code, capture_stack: _, context, sdc, factory } = self;
        let rendered_message = if message.is_empty() { fallback.into() } else { message.clone() };

        factory.assemble(ErrorParts { message, rendered_message, code, cause, stack, context, sdc })
    }

    /// Builds an error without a cause. Same as `build(None, fallback)`; use
    /// [`wrap`](Self::wrap) or [`build`](Self::build) to attach one.
    #[inline(never)]
    pub fn error<S: Into<String>>(self, fallback: S) -> F::Output {
        self.build(None, fallback)
    }

    /// Builds an error wrapping `cause`.
    #[inline(never)]
    pub fn wrap<E, S>(self, cause: E, fallback: S) -> F::Output
    where
        E: Error + Send + Sync + 'static,
        S: Into<String>,
    {
        self.build(Some(into_shared(cause)), fallback)
    }

    /// Builds an error without a cause, formatting the fallback message.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_shape::ErrorBuilder;
    ///
    /// let err = ErrorBuilder::new().errorf(format_args!("retry {} of {}", 2, 3));
    /// assert_eq!(err.to_string(), "retry 2 of 3");
    /// ```
    #[inline(never)]
    pub fn errorf(self, args: fmt::Arguments<'_>) -> F::Output {
        self.build(None, fmt::format(args))
    }

    /// Builds an error wrapping `cause`, formatting the fallback message.
    #[inline(never)]
    pub fn wrapf<E>(self, cause: E, args: fmt::Arguments<'_>) -> F::Output
    where
        E: Error + Send + Sync + 'static,
    {
        self.build(Some(into_shared(cause)), fmt::format(args))
    }
}

impl<F> fmt::Debug for ErrorBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBuilder")
            .field("message", &self.message)
            .field("code", &self.code)
            .field("capture_stack", &self.capture_stack)
            .field("context", &self.context)
            .field("sdc", &self.sdc)
            .finish_non_exhaustive()
    }
}
