//! Value types carried by structured errors.
//!
//! # Examples
//!
//! ```
//! use error_shape::{message, StructuredError};
//!
//! let err: StructuredError = message("connection refused")
//!     .with_code("NET_ERR")
//!     .with_sdc("trace_id", "t1")
//!     .error("request failed");
//!
//! assert_eq!(err.to_string(), "connection refused");
//! assert_eq!(err.code().as_str(), "NET_ERR");
//! assert_eq!(err.sdc()["trace_id"], "t1");
//! ```
use smallvec::SmallVec;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

pub mod code;
pub mod context_value;
pub mod plain_error;
pub mod stack;
pub mod structured_error;

pub use code::*;
pub use context_value::*;
pub use plain_error::*;
pub use stack::*;
pub use structured_error::*;

/// A shared, immutable error used as a cause.
///
/// Causes may be referenced from several places at once; nothing in this
/// crate ever mutates one.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// The programmatic context bag: arbitrary values keyed by name.
pub type ContextMap = HashMap<String, ContextValue>;

/// The structured diagnostic context bag: string values keyed by name.
pub type SdcMap = HashMap<String, String>;

/// An unwrapped cause chain, outermost error first.
///
/// Uses inline storage for up to 4 links, which covers most chains without a
/// heap allocation.
pub type ErrorChain<'a> = SmallVec<[&'a (dyn Error + 'static); 4]>;

/// Converts any error into a [`SharedError`].
///
/// An error that already is a [`SharedError`] is reused rather than wrapped a
/// second time, so downcasting and source walking still reach the original.
///
/// # Examples
///
/// ```
/// use error_shape::into_shared;
/// use std::sync::Arc;
///
/// let first = into_shared(std::io::Error::other("disk full"));
/// let second = into_shared(first.clone());
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub fn into_shared<E>(error: E) -> SharedError
where
    E: Error + Send + Sync + 'static,
{
    if let Some(shared) = (&error as &dyn core::any::Any).downcast_ref::<SharedError>() {
        return Arc::clone(shared);
    }
    Arc::new(error)
}
