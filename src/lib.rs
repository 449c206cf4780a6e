//! Structured error construction and inspection.
//!
//! Errors are built with a fluent [`ErrorBuilder`] that accumulates a message,
//! a machine-readable [`Code`], a free-form context bag, a string-only
//! diagnostic bag ("SDC") and an optional stack capture, then freezes them
//! into an immutable [`StructuredError`]. Any error can later be handed to the
//! introspection functions to recover that structure, with plain errors
//! degrading to zero values.
//!
//! # Examples
//!
//! ## Building an Error
//!
//! ```
//! use error_shape::message;
//!
//! let cause = std::io::Error::other("disk full");
//! let err = message("could not persist order")
//!     .with_code("DB_ERR")
//!     .with_context("order_id", 1234_u64)
//!     .with_sdc("trace_id", "t1")
//!     .wrap(cause, "write failed");
//!
//! assert_eq!(err.to_string(), "could not persist order; caused by: disk full");
//! assert_eq!(err.code().as_str(), "DB_ERR");
//! ```
//!
//! ## Inspecting Any Error
//!
//! ```
//! use error_shape::{code, parse};
//!
//! let err = code("DB_ERR").with_sdc("trace_id", "t1").error("write failed");
//! let info = parse(&err);
//! assert!(info.is_structured);
//!
//! let plain = std::io::Error::other("plain");
//! let info = parse(&plain);
//! assert!(!info.is_structured);
//! assert_eq!(info.error_message, "plain");
//! ```
//!
//! ## Walking a Cause Chain
//!
//! ```
//! use error_shape::{root_cause, unwrap_chain, wrap};
//!
//! let base = std::io::Error::other("timeout");
//! let middle = wrap(base, "query failed");
//! let top = wrap(middle, "user lookup failed");
//!
//! let chain = unwrap_chain(&top);
//! assert_eq!(chain.len(), 3);
//! assert_eq!(root_cause(&top).map(|e| e.to_string()), Some("timeout".to_string()));
//! ```

/// Fluent builder, construction factories and free entry points
pub mod builder;
/// Introspection of arbitrary errors
pub mod inspect;
/// Formatting macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and extension traits
pub mod traits;
/// StructuredError and the value types it carries
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use builder::*;
pub use inspect::*;
pub use traits::*;
pub use types::*;
