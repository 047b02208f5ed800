use crate::trace::{TraceFrame, TraceRecorder};

/// How many frames a [`DefaultRecorder`] keeps unless told otherwise.
pub const DEFAULT_TRACE_CAPACITY: usize = 50;

/// A bounded in-memory recorder.
///
/// New frames go to the front; once `capacity` frames are stored the oldest one is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRecorder {
    frames: Vec<TraceFrame>,
    capacity: usize,
    recording: bool,
}

impl Default for DefaultRecorder {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TRACE_CAPACITY)
    }
}

impl DefaultRecorder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
            recording: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push_front(&mut self, frame: TraceFrame) {
        if self.capacity == 0 {
            return;
        }
        self.frames.insert(0, frame);
        self.frames.truncate(self.capacity);
    }
}

impl TraceRecorder for DefaultRecorder {
    fn start(&mut self) {
        self.frames.clear();
        self.recording = true;
    }

    fn stop(&mut self) {
        self.recording = false;
    }

    fn is_recording(&self) -> bool {
        self.recording
    }

    fn record(&mut self, frame: TraceFrame) {
        if self.recording {
            self.push_front(frame);
        }
    }

    fn unshift(&mut self, frame: TraceFrame) {
        self.push_front(frame);
    }

    fn frames(&self) -> &[TraceFrame] {
        &self.frames
    }
}
