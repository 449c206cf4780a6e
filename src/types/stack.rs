//! Cheap stack capture with deferred symbolization.
//!
//! Capturing only records instruction pointers. Turning them into function
//! names, files and lines is the expensive part, so it is postponed until the
//! first call to [`CapturedStack::frames`] and cached afterwards.
//!
//! # Examples
//!
//! ```
//! use error_shape::CapturedStack;
//!
//! let stack = CapturedStack::none();
//! assert!(!stack.is_captured());
//! assert!(stack.frames().is_empty());
//! ```

use backtrace::Backtrace;
use core::fmt::{self, Display};
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of frames kept after internal frames are skipped.
pub const MAX_STACK_DEPTH: usize = 15;

/// Symbol path prefixes of this crate's construction layer.
const CRATE_PREFIXES: &[&str] = &[
    "error_shape::builder::",
    "<error_shape::builder::",
    "error_shape::types::stack::",
    "<error_shape::types::stack::",
    "error_shape::traits::",
    "<error_shape::traits::",
];

/// Trait impls of this crate's traits on foreign types, e.g. `Result`.
const CRATE_IMPL_MARKER: &str = " as error_shape::traits::";

/// One resolved call-stack frame.
///
/// Unknown functions and files are rendered as empty strings, an unknown line
/// as `0`.
///
/// # Examples
///
/// ```
/// use error_shape::StackFrame;
///
/// let frame = StackFrame::new("app::load", "src/app.rs", 42);
/// assert_eq!(frame.to_string(), "app::load:src/app.rs:42");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StackFrame {
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl StackFrame {
    #[inline]
    pub fn new<F, P>(function: F, file: P, line: u32) -> Self
    where
        F: Into<String>,
        P: Into<String>,
    {
        Self { function: function.into(), file: file.into(), line }
    }
}

impl Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.function, self.file, self.line)
    }
}

enum StackState {
    NotCaptured,
    Captured { raw: Backtrace, resolved: OnceLock<Vec<StackFrame>> },
}

/// A call stack that is captured eagerly and symbolized lazily.
///
/// The state only ever moves from "captured" to "captured and resolved".
/// Resolution is deterministic, so every reader observes the same frames.
pub struct CapturedStack {
    state: StackState,
}

impl CapturedStack {
    /// A stack that was never captured. Its frames are always empty.
    #[inline]
    pub const fn none() -> Self {
        Self { state: StackState::NotCaptured }
    }

    /// Records the current call stack without resolving symbols.
    #[inline(never)]
    pub fn capture() -> Self {
        Self {
            state: StackState::Captured {
                raw: Backtrace::new_unresolved(),
                resolved: OnceLock::new(),
            },
        }
    }

    /// Returns `true` if a raw capture exists.
    #[inline]
    pub fn is_captured(&self) -> bool {
        matches!(self.state, StackState::Captured { .. })
    }

    /// Returns `true` once the capture has been symbolized.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        match &self.state {
            StackState::NotCaptured => false,
            StackState::Captured { resolved, .. } => resolved.get().is_some(),
        }
    }

    /// Returns the resolved frames, symbolizing on first access.
    ///
    /// Frame 0 is the code that requested the capture; frames belonging to
    /// the capture machinery and the builder layer are skipped, and at most
    /// [`MAX_STACK_DEPTH`] frames are returned.
    pub fn frames(&self) -> &[StackFrame] {
        match &self.state {
            StackState::NotCaptured => &[],
            StackState::Captured { raw, resolved } => resolved.get_or_init(|| resolve(raw)),
        }
    }
}

impl Default for CapturedStack {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for CapturedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            StackState::NotCaptured => f.write_str("NotCaptured"),
            StackState::Captured { resolved, .. } => match resolved.get() {
                Some(frames) => f.debug_tuple("Resolved").field(frames).finish(),
                None => f.write_str("Captured"),
            },
        }
    }
}

fn resolve(raw: &Backtrace) -> Vec<StackFrame> {
    let mut backtrace = raw.clone();
    backtrace.resolve();

    let frames: Vec<StackFrame> = backtrace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .map(|symbol| StackFrame {
            function: symbol.name().map(|name| format!("{:#}", name)).unwrap_or_default(),
            file: symbol
                .filename()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            line: symbol.lineno().unwrap_or(0),
        })
        .collect();

    let start = caller_offset(&frames);
    frames.into_iter().skip(start).take(MAX_STACK_DEPTH).collect()
}

/// Index of the first caller frame.
///
/// Capture machinery sits below the first crate frame and the crate's own
/// frames form one run, so the caller is the first named frame after that
/// run. Without any crate frame nothing is skipped.
fn caller_offset(frames: &[StackFrame]) -> usize {
    let mut run_end = None;
    for (index, frame) in frames.iter().enumerate() {
        if is_crate_frame(frame) {
            run_end = Some(index + 1);
        } else if run_end.is_some() && !frame.function.is_empty() {
            return index;
        }
    }
    run_end.unwrap_or(0)
}

fn is_crate_frame(frame: &StackFrame) -> bool {
    CRATE_PREFIXES.iter().any(|prefix| frame.function.starts_with(prefix))
        || frame.function.contains(CRATE_IMPL_MARKER)
}
