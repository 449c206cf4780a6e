use core::fmt::{self, Display};

/// A message-only error.
///
/// Produced by [`FallbackFactory`](crate::builder::FallbackFactory) when a
/// builder has no structured constructor to hand its state to and no cause to
/// return instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainError {
    message: String,
}

impl PlainError {
    /// Creates an error that displays exactly `message`.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// Returns the message shown by `Display`.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PlainError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PlainError {}
