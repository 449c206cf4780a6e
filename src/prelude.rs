//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_shape::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errorf!`], [`wrapf!`]
//! - **Entry points**: [`message`], [`code`], [`context`], [`sdc`], [`error`], [`wrap`]
//! - **Types**: [`StructuredError`], [`ErrorBuilder`], [`Code`], [`StackFrame`], [`ErrorInfo`]
//! - **Traits**: [`ResultExt`]
//! - **Introspection**: [`parse`], [`as_structured`], [`get_code`], [`has_code`],
//!   [`unwrap_chain`], [`root_cause`]
//!
//! # Examples
//!
//! ```
//! use error_shape::prelude::*;
//!
//! fn load_config() -> Result<String, StructuredError> {
//!     std::fs::read_to_string("config.toml")
//!         .wrap_err_as(|b| b.with_code("CONFIG_ERR"), "loading configuration")
//! }
//!
//! if let Err(err) = load_config() {
//!     assert!(has_code(&err, "CONFIG_ERR"));
//! }
//! ```

// Macros
pub use crate::{errorf, wrapf};

// Entry points
pub use crate::builder::{code, context, error, message, sdc, wrap};

// Core types
pub use crate::inspect::ErrorInfo;
pub use crate::types::{Code, SharedError, StackFrame, StructuredError};
pub use crate::ErrorBuilder;

// Traits
pub use crate::traits::ResultExt;

// Introspection
pub use crate::inspect::{as_structured, get_code, has_code, parse, root_cause, unwrap_chain};
