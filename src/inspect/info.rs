use crate::types::{Code, ContextMap, SdcMap, SharedError, StackFrame};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A plain snapshot of everything [`parse`](crate::parse) could recover from
/// an error.
///
/// For errors that are not structured only `error_message` is filled in;
/// every other field keeps its zero value.
///
/// With the `serde` feature the snapshot serializes for log shipping: context
/// values are rendered with [`ContextValue::to_text`](crate::ContextValue::to_text)
/// (`null` for non-textual types) and the cause as its display text.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Default)]
pub struct ErrorInfo {
    pub code: Code,
    /// The explicitly configured message.
    pub message: String,
    /// The display text of the first structured link, or of the error itself
    /// when it is not structured.
    pub error_message: String,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serde_impl::context"))]
    pub context: Option<ContextMap>,
    pub sdc: Option<SdcMap>,
    pub stack_trace: Vec<StackFrame>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serde_impl::cause"))]
    pub cause: Option<SharedError>,
    pub is_structured: bool,
}

#[cfg(feature = "serde")]
mod serde_impl {
    use crate::types::{ContextMap, SharedError};
    use serde::{Serialize, Serializer};

    struct ContextText<'a>(&'a ContextMap);

    impl Serialize for ContextText<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.0.iter().map(|(key, value)| (key, value.to_text())))
        }
    }

    pub(super) fn context<S: Serializer>(
        context: &Option<ContextMap>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match context {
            Some(map) => serializer.serialize_some(&ContextText(map)),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn cause<S: Serializer>(
        cause: &Option<SharedError>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match cause {
            Some(cause) => serializer.serialize_some(&cause.to_string()),
            None => serializer.serialize_none(),
        }
    }
}
