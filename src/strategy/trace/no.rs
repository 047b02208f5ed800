use crate::trace::{TraceFrame, TraceRecorder};

/// Never keeps a frame, the prompt will report that no backtrace is available.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoRecorder;

impl TraceRecorder for NoRecorder {
    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn is_recording(&self) -> bool {
        false
    }

    fn record(&mut self, _: TraceFrame) {}

    fn unshift(&mut self, _: TraceFrame) {}

    fn frames(&self) -> &[TraceFrame] {
        &[]
    }
}
