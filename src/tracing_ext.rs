//! Tracing integration for structured errors.
//!
//! The diagnostic context bag exists for log correlation; this module turns
//! it, together with the code and cause chain, into `tracing` events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-shape = { version = "0.3", features = ["tracing"] }
//! ```

use crate::inspect::{as_structured, unwrap_chain};
use crate::traits::IntoErrorRef;
use std::error::Error;

/// Event target used by [`record_error`].
pub const TARGET: &str = "error_shape";

/// Flattens an error into sorted `(name, value)` pairs for structured logging.
///
/// Structured errors contribute `code` and `message` (when set) and one
/// `sdc.<key>` pair per diagnostic entry. Every error contributes `error`, its
/// display text. `None` yields no pairs.
///
/// # Example
///
/// ```
/// use error_shape::{code, tracing_ext::log_fields};
///
/// let err = code("DB_ERR").with_sdc("trace_id", "t1").error("write failed");
/// let fields = log_fields(&err);
///
/// assert_eq!(fields[0], ("code".to_string(), "DB_ERR".to_string()));
/// assert_eq!(fields[1], ("sdc.trace_id".to_string(), "t1".to_string()));
/// assert_eq!(fields[2], ("error".to_string(), "write failed".to_string()));
/// ```
pub fn log_fields<'a, E>(err: E) -> Vec<(String, String)>
where
    E: IntoErrorRef<'a>,
{
    let Some(error) = err.into_error_ref() else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    if let Some(structured) = as_structured(error) {
        if !structured.code().is_empty() {
            fields.push(("code".to_owned(), structured.code().to_string()));
        }
        if !structured.message().is_empty() {
            fields.push(("message".to_owned(), structured.message().to_owned()));
        }
        let mut sdc: Vec<_> = structured
            .sdc()
            .iter()
            .map(|(key, value)| (format!("sdc.{}", key), value.clone()))
            .collect();
        sdc.sort();
        fields.extend(sdc);
    }
    fields.push(("error".to_owned(), error.to_string()));
    fields
}

/// Emits one `ERROR` event describing `err`.
///
/// The event carries the code, the diagnostic context rendered as
/// `key=value` pairs, and the depth of the cause chain. `None` emits nothing.
pub fn record_error<'a, E>(err: E)
where
    E: IntoErrorRef<'a>,
{
    let Some(error) = err.into_error_ref() else {
        return;
    };

    let structured = as_structured(error);
    let code = structured.map_or("", |s| s.code().as_str());
    let sdc = structured.map(render_sdc).unwrap_or_default();
    let depth = unwrap_chain(error).len();

    tracing::error!(target: TARGET, code = %code, sdc = %sdc, chain_depth = depth, "{}", error);
}

fn render_sdc(structured: &crate::StructuredError) -> String {
    let mut pairs: Vec<_> = structured.sdc().iter().collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extension trait for logging the error of a `Result` without consuming it.
///
/// # Example
///
/// ```
/// use error_shape::tracing_ext::ResultTraceExt;
/// use error_shape::{code, StructuredError};
///
/// fn read_config() -> Result<String, StructuredError> {
///     Err(code("CONFIG_ERR").error("config missing"))
/// }
///
/// fn load() -> Result<String, StructuredError> {
///     read_config().trace_err()
/// }
///
/// let err = load().unwrap_err();
/// assert_eq!(err.code().as_str(), "CONFIG_ERR");
/// ```
pub trait ResultTraceExt {
    /// Records the error with [`record_error`] and returns `self` unchanged.
    fn trace_err(self) -> Self;
}

impl<T, E> ResultTraceExt for Result<T, E>
where
    E: Error + 'static,
{
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(error) = &self {
            record_error(error);
        }
        self
    }
}
