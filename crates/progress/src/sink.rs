//! Presentation layer interface.

use sheet_core::RenderFrame;

/// Receives derived visual state after every change.
pub trait ProgressSink {
    /// Update the presentation to match `frame`.
    fn present(&mut self, frame: &RenderFrame);
}

impl<P: ProgressSink + ?Sized> ProgressSink for &mut P {
    fn present(&mut self, frame: &RenderFrame) {
        (**self).present(frame)
    }
}

/// Sink that keeps every frame it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<RenderFrame>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames so far, oldest first.
    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }
}

impl ProgressSink for RecordingSink {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}
