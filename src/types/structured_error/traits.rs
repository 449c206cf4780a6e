use super::StructuredError;
use core::fmt::{self, Debug, Display};
use std::error::Error;

/// Separator between an error's own message and its cause's text.
pub(crate) const CAUSE_SEPARATOR: &str = "; caused by: ";

impl Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered_message)?;
        if let Some(cause) = &self.cause {
            write!(f, "{}{}", CAUSE_SEPARATOR, cause)?;
        }
        Ok(())
    }
}

impl Debug for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredError")
            .field("message", &self.message)
            .field("rendered_message", &self.rendered_message)
            .field("code", &self.code)
            .field("context", &self.context)
            .field("sdc", &self.sdc)
            .field("cause", &self.cause)
            .field("stack", &self.stack)
            .finish()
    }
}

impl Error for StructuredError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
