//! Opaque error codes.
//!
//! This crate does not define any codes. [`Code`] is only the shape that
//! carries one: a string wrapper kept distinct from free-form messages so a
//! code can never be confused with human text at a call site.

use core::fmt::{self, Display};
use core::ops::Deref;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A machine-readable error code.
///
/// The empty code means "no code set".
///
/// # Examples
///
/// ```
/// use error_shape::Code;
///
/// let code = Code::from("DB_ERR");
/// assert_eq!(code.as_str(), "DB_ERR");
/// assert!(!code.is_empty());
/// assert!(Code::default().is_empty());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(String);

impl Code {
    /// The empty code.
    #[inline]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Creates a code from any string-like value.
    #[inline]
    pub fn new<S: Into<String>>(code: S) -> Self {
        Self(code.into())
    }

    /// Returns the textual form of the code.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when no code is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the code, returning the owned string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Code {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Code {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Code {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Code {
    #[inline]
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl From<String> for Code {
    #[inline]
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&String> for Code {
    #[inline]
    fn from(code: &String) -> Self {
        Self(code.clone())
    }
}

impl From<Code> for String {
    #[inline]
    fn from(code: Code) -> Self {
        code.0
    }
}

impl PartialEq<str> for Code {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Code {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
