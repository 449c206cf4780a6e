//! Conversion and extension traits.
//!
//! - [`IntoErrorRef`]: normalizes the inputs accepted by the introspection
//!   functions (concrete errors, trait objects, shared causes, `Option`s)
//! - [`ResultExt`]: wraps the error of a `Result` into a structured error
//!
//! # Examples
//!
//! ```
//! use error_shape::traits::ResultExt;
//! use error_shape::is_structured;
//!
//! let result: Result<u8, std::num::ParseIntError> = "x".parse::<u8>();
//! let err = result.wrap_err("parsing port").unwrap_err();
//! assert!(is_structured(&err));
//! ```

pub mod into_error_ref;
pub mod result_ext;

pub use into_error_ref::IntoErrorRef;
pub use result_ext::ResultExt;
