//! Recording of trace frames around a test body.
//!
//! The engine opens a recording window right before the before-hooks of a test and
//! closes it once the body (and, when it did not raise, the after-hooks) finished.
//! Frames recorded inside the window are the breadcrumbs left with
//! [`Probe::mark`](crate::Probe::mark); when the body raises, the engine puts one more
//! frame for the point of failure in front of them.

use std::{fmt::Display, panic::Location};

mod default;
pub use default::*;

mod no;
pub use no::*;

/// One entry of a recorded trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    pub file: String,
    /// 1-based.
    pub line: u32,
    pub label: String,
}

impl TraceFrame {
    pub fn new(file: impl Into<String>, line: u32, label: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            label: label.into(),
        }
    }

    pub fn at(location: &Location<'_>, label: impl Into<String>) -> Self {
        Self::new(location.file(), location.line(), label)
    }
}

impl Display for TraceFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.file, self.line, self.label)
    }
}

/// Keeps the frames of the current test, most recent first.
pub trait TraceRecorder {
    /// Drop all frames and open a new recording window.
    fn start(&mut self);

    fn stop(&mut self);

    fn is_recording(&self) -> bool;

    /// Store a frame if the window is open.
    fn record(&mut self, frame: TraceFrame);

    /// Put a frame in front, whether or not the window is open.
    fn unshift(&mut self, frame: TraceFrame);

    fn frames(&self) -> &[TraceFrame];
}

impl<R: TraceRecorder + ?Sized> TraceRecorder for &mut R {
    fn start(&mut self) {
        (**self).start()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn is_recording(&self) -> bool {
        (**self).is_recording()
    }

    fn record(&mut self, frame: TraceFrame) {
        (**self).record(frame)
    }

    fn unshift(&mut self, frame: TraceFrame) {
        (**self).unshift(frame)
    }

    fn frames(&self) -> &[TraceFrame] {
        (**self).frames()
    }
}
