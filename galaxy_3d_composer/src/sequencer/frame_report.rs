/// Record of which passes ran during one `compose()`

use crate::engine_trace;
use crate::render_graph::PassId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    frame: u64,
    executed: Vec<PassId>,
    skipped: Vec<PassId>,
}

impl FrameReport {
    pub fn new(frame: u64) -> Self {
        Self {
            frame,
            executed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Index of the composed frame, starting at 0
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Passes that ran, in execution order
    pub fn executed(&self) -> &[PassId] {
        &self.executed
    }

    /// Passes gated off by a toggle or a quality threshold
    pub fn skipped(&self) -> &[PassId] {
        &self.skipped
    }

    pub fn was_executed(&self, pass: PassId) -> bool {
        self.executed.contains(&pass)
    }

    pub fn was_skipped(&self, pass: PassId) -> bool {
        self.skipped.contains(&pass)
    }

    pub(crate) fn record_executed(&mut self, pass: PassId) {
        self.executed.push(pass);
    }

    pub(crate) fn record_skipped(&mut self, pass: PassId) {
        engine_trace!("galaxy3d::PassSequencer", "Frame {}: pass '{}' skipped", self.frame, pass);
        self.skipped.push(pass);
    }
}
