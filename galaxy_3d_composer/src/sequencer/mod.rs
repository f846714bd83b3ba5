//! Pass sequencer module
//!
//! Runs the frame's passes in their fixed order and tracks the
//! initialize/update/compose state machine.

mod frame_report;
mod pass_sequencer;

pub use frame_report::FrameReport;
pub use pass_sequencer::{PassSequencer, SequencerState};
