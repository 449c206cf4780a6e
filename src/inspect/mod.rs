//! Recovering structure from arbitrary errors.
//!
//! Every function here accepts anything implementing
//! [`IntoErrorRef`](crate::traits::IntoErrorRef), including `None`, and never
//! panics. When the input is not, and does not wrap, a [`StructuredError`],
//! accessors degrade to their type's zero value: an empty code or string, no
//! map, an empty stack, no cause. Callers therefore cannot tell "not a
//! structured error" from "field not set", and do not need to.
//!
//! Matching walks the `source()` chain, so a plain wrapper around a structured
//! error still matches and yields the outermost structured link.
//!
//! # Examples
//!
//! ```
//! use error_shape::{code, get_code_string, get_sdc_value, has_code, root_cause, unwrap_chain};
//!
//! let disk = std::io::Error::other("disk full");
//! let err = code("DB_ERR").with_sdc("trace_id", "t1").wrap(disk, "write failed");
//!
//! assert_eq!(get_code_string(&err), "DB_ERR");
//! assert_eq!(get_sdc_value(&err, "trace_id"), "t1");
//! assert!(has_code(&err, "DB_ERR"));
//! assert_eq!(unwrap_chain(&err).len(), 2);
//! assert_eq!(root_cause(&err).map(|e| e.to_string()), Some("disk full".to_string()));
//! ```

use crate::traits::IntoErrorRef;
use crate::types::{
    Code, ContextMap, ContextValue, ErrorChain, SdcMap, SharedError, StackFrame, StructuredError,
};
use std::error::Error;

mod info;

pub use info::ErrorInfo;

static EMPTY_CODE: Code = Code::empty();

/// Returns the outermost [`StructuredError`] in the error's source chain.
///
/// `None` if the input is `None` or no link in the chain is structured.
///
/// # Examples
///
/// ```
/// use error_shape::{as_structured, error};
/// use std::error::Error;
///
/// let err = error("boom");
/// assert!(as_structured(&err).is_some());
/// assert!(as_structured(&std::io::Error::other("plain")).is_none());
/// assert!(as_structured(None::<&dyn Error>).is_none());
/// ```
pub fn as_structured<'a, E>(err: E) -> Option<&'a StructuredError>
where
    E: IntoErrorRef<'a>,
{
    let mut current = peel(err.into_error_ref()?);
    loop {
        if let Some(structured) = current.downcast_ref::<StructuredError>() {
            return Some(structured);
        }
        current = peel(current.source()?);
    }
}

/// Returns `true` if [`as_structured`] finds a structured error.
#[inline]
pub fn is_structured<'a, E>(err: E) -> bool
where
    E: IntoErrorRef<'a>,
{
    as_structured(err).is_some()
}

/// Takes a full snapshot of the error.
///
/// - `None` yields an [`ErrorInfo`] with every field at its zero value.
/// - A non-structured error yields only `error_message`.
/// - A structured error (or one wrapping a structured error) yields every
///   accessor of the first structured link and `is_structured = true`.
///   `error_message` is then the display text of that structured link.
///
/// # Examples
///
/// ```
/// use error_shape::{code, parse};
///
/// let err = code("DB_ERR").with_context("host", "localhost").error("write failed");
/// let info = parse(&err);
///
/// assert!(info.is_structured);
/// assert_eq!(info.code.as_str(), "DB_ERR");
/// assert_eq!(info.error_message, "write failed");
/// assert!(info.context.is_some_and(|ctx| ctx.contains_key("host")));
/// ```
pub fn parse<'a, E>(err: E) -> ErrorInfo
where
    E: IntoErrorRef<'a>,
{
    let Some(error) = err.into_error_ref() else {
        return ErrorInfo::default();
    };

    let Some(structured) = as_structured(error) else {
        return ErrorInfo { error_message: error.to_string(), ..ErrorInfo::default() };
    };

    ErrorInfo {
        code: structured.code().clone(),
        message: structured.message().to_owned(),
        error_message: structured.to_string(),
        context: Some(structured.context().clone()),
        sdc: Some(structured.sdc().clone()),
        stack_trace: structured.stack_trace().to_vec(),
        cause: structured.cause().cloned(),
        is_structured: true,
    }
}

/// Returns the error code, or the empty code.
#[inline]
pub fn get_code<'a, E>(err: E) -> &'a Code
where
    E: IntoErrorRef<'a>,
{
    as_structured(err).map_or(&EMPTY_CODE, StructuredError::code)
}

/// Returns the textual form of [`get_code`].
#[inline]
pub fn get_code_string<'a, E>(err: E) -> &'a str
where
    E: IntoErrorRef<'a>,
{
    get_code(err).as_str()
}

/// Returns the explicitly configured message, or `""`.
#[inline]
pub fn get_message<'a, E>(err: E) -> &'a str
where
    E: IntoErrorRef<'a>,
{
    as_structured(err).map_or("", StructuredError::message)
}

/// Returns the context bag, or `None` for non-structured errors.
#[inline]
pub fn get_context<'a, E>(err: E) -> Option<&'a ContextMap>
where
    E: IntoErrorRef<'a>,
{
    as_structured(err).map(StructuredError::context)
}

/// Returns one context value, or `None` if the error is not structured or the
/// key is absent.
#[inline]
pub fn get_context_value<'a, E>(err: E, key: &str) -> Option<&'a ContextValue>
where
    E: IntoErrorRef<'a>,
{
    get_context(err).and_then(|context| context.get(key))
}

/// Returns the structured diagnostic context, or `None` for non-structured
/// errors.
#[inline]
pub fn get_sdc<'a, E>(err: E) -> Option<&'a SdcMap>
where
    E: IntoErrorRef<'a>,
{
    as_structured(err).map(StructuredError::sdc)
}

/// Returns one diagnostic context value, or `""` if the error is not
/// structured or the key is absent.
#[inline]
pub fn get_sdc_value<'a, E>(err: E, key: &str) -> &'a str
where
    E: IntoErrorRef<'a>,
{
    get_sdc(err).and_then(|sdc| sdc.get(key)).map_or("", String::as_str)
}

/// Returns the resolved stack trace, or an empty slice.
#[inline]
pub fn get_stack_trace<'a, E>(err: E) -> &'a [StackFrame]
where
    E: IntoErrorRef<'a>,
{
    as_structured(err).map(StructuredError::stack_trace).unwrap_or_default()
}

/// Returns the cause of the first structured link, or `None`.
#[inline]
pub fn get_cause<'a, E>(err: E) -> Option<&'a SharedError>
where
    E: IntoErrorRef<'a>,
{
    as_structured(err).and_then(StructuredError::cause)
}

/// Returns `true` if [`get_code_string`] equals `code`.
///
/// A non-structured error has the empty code, so `has_code(plain, "")` holds.
#[inline]
pub fn has_code<'a, E>(err: E, code: &str) -> bool
where
    E: IntoErrorRef<'a>,
{
    get_code_string(err) == code
}

/// Returns `true` if the context bag of the first structured link contains
/// `key`. Always `false` for non-structured errors.
#[inline]
pub fn has_context_key<'a, E>(err: E, key: &str) -> bool
where
    E: IntoErrorRef<'a>,
{
    get_context(err).is_some_and(|context| context.contains_key(key))
}

/// Returns `true` if the diagnostic context of the first structured link
/// contains `key`. Always `false` for non-structured errors.
#[inline]
pub fn has_sdc_key<'a, E>(err: E, key: &str) -> bool
where
    E: IntoErrorRef<'a>,
{
    get_sdc(err).is_some_and(|sdc| sdc.contains_key(key))
}

/// Unwraps the whole cause chain, outermost error first.
///
/// A link that is, or wraps, a structured error continues through that
/// structured error's cause, so plain wrappers around a structured error are
/// followed directly by its cause. Every other link continues through
/// `source()`. `None` yields an empty chain; an error without a source yields
/// a chain containing only itself.
///
/// The walk is not guarded against cycles: an error type whose `source()`
/// eventually returns itself makes this loop forever.
pub fn unwrap_chain<'a, E>(err: E) -> ErrorChain<'a>
where
    E: IntoErrorRef<'a>,
{
    let mut chain = ErrorChain::new();
    let mut current = err.into_error_ref().map(peel);

    while let Some(error) = current {
        chain.push(error);
        current = next_link(error).map(peel);
    }

    chain
}

/// Returns the last element of [`unwrap_chain`], or `None` for `None`.
#[inline]
pub fn root_cause<'a, E>(err: E) -> Option<&'a (dyn Error + 'static)>
where
    E: IntoErrorRef<'a>,
{
    unwrap_chain(err).last().copied()
}

/// A link that is, or wraps, a structured error continues from that
/// structured error's cause; plain wrappers in between are skipped.
fn next_link<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    match as_structured(error) {
        Some(structured) => structured.cause().map(|cause| &**cause as &(dyn Error + 'static)),
        None => error.source(),
    }
}

/// Sees through shared causes that surface as the `Arc` itself.
fn peel<'a>(mut error: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    while let Some(shared) = error.downcast_ref::<SharedError>() {
        error = &**shared;
    }
    error
}
