/// Pass sequencer - drives one frame through the fixed pass order.
///
/// Stage order: reflections, shadows, secondary scene, light shafts,
/// composition-1, bloom, composition-2, color-graded composition. Bloom
/// reads composition-1 and therefore runs after it.

use crate::error::{Error, Result};
use crate::passes::{self, FrameContext};
use crate::render_graph::{FrameGraph, PassId};
use crate::{engine_debug, engine_err, engine_error};
use super::frame_report::FrameReport;

/// Lifecycle state of the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// No render targets allocated yet
    Uninitialized,
    /// Targets allocated, idle between frames
    Ready,
    /// Frame state updated, waiting for composition
    Updating,
    /// A `compose()` call is in progress
    Composing,
}

pub struct PassSequencer {
    state: SequencerState,
    graph: FrameGraph,
    frames_composed: u64,
}

impl PassSequencer {
    /// Create a sequencer for the standard frame
    pub fn new() -> Self {
        Self {
            state: SequencerState::Uninitialized,
            graph: FrameGraph::standard(),
            frames_composed: 0,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn graph(&self) -> &FrameGraph {
        &self.graph
    }

    pub fn frames_composed(&self) -> u64 {
        self.frames_composed
    }

    // ===== TRANSITIONS =====

    /// Enter `Ready` after the render targets were (re)allocated
    ///
    /// # Errors
    ///
    /// `InvalidState` while a frame is being composed, or the frame
    /// graph's validation error.
    pub fn mark_initialized(&mut self) -> Result<()> {
        self.check_reallocation_allowed()?;
        self.graph.validate()?;
        self.state = SequencerState::Ready;
        Ok(())
    }

    /// Back to `Uninitialized` after the targets were released
    pub fn reset(&mut self) {
        self.state = SequencerState::Uninitialized;
    }

    /// Enter `Updating`
    ///
    /// Allowed from `Ready` and `Updating` (a frame may be updated again
    /// before it is composed).
    pub fn begin_update(&mut self) -> Result<()> {
        match self.state {
            SequencerState::Ready | SequencerState::Updating => {
                self.state = SequencerState::Updating;
                Ok(())
            }
            state => Err(invalid_transition("update", state)),
        }
    }

    /// Check that targets are allocated and no frame is being composed
    pub fn check_initialized(&self, operation: &str) -> Result<()> {
        match self.state {
            SequencerState::Uninitialized | SequencerState::Composing => {
                Err(invalid_transition(operation, self.state))
            }
            _ => Ok(()),
        }
    }

    /// Check that render targets may be reallocated now
    pub fn check_reallocation_allowed(&self) -> Result<()> {
        match self.state {
            SequencerState::Composing => Err(invalid_transition("reallocate", self.state)),
            _ => Ok(()),
        }
    }

    pub(crate) fn begin_compose(&mut self) -> Result<()> {
        match self.state {
            SequencerState::Ready | SequencerState::Updating => {
                self.state = SequencerState::Composing;
                Ok(())
            }
            state => Err(invalid_transition("compose", state)),
        }
    }

    /// Back to `Ready`; only a completed frame is counted
    pub(crate) fn end_compose(&mut self, completed: bool) {
        self.state = SequencerState::Ready;
        if completed {
            self.frames_composed += 1;
        }
    }

    // ===== COMPOSE =====

    /// Run every stage of one frame
    ///
    /// The sequencer returns to `Ready` whether or not a pass failed. An
    /// aborted frame is not counted in `frames_composed()`.
    ///
    /// # Errors
    ///
    /// `InvalidState` when not initialized or already composing,
    /// `InvalidResource` when the main scene target has no depth buffer,
    /// and any device or renderer error, unchanged.
    pub fn compose(&mut self, ctx: &mut FrameContext<'_>) -> Result<FrameReport> {
        self.begin_compose()?;

        let mut report = FrameReport::new(self.frames_composed);
        let result = Self::run_stages(ctx, &mut report);
        self.end_compose(result.is_ok());

        match result {
            Ok(()) => {
                engine_debug!("galaxy3d::PassSequencer",
                    "Frame {} composed: {} passes executed, {} skipped",
                    report.frame(), report.executed().len(), report.skipped().len());
                Ok(report)
            }
            Err(e) => {
                engine_error!("galaxy3d::PassSequencer",
                    "Frame {} aborted: {}", report.frame(), e);
                Err(e)
            }
        }
    }

    fn run_stages(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
        if !ctx.scene.main.has_depth() {
            return Err(Error::InvalidResource(format!(
                "main scene target '{}' has no depth buffer", ctx.scene.main.label())));
        }

        passes::render_reflections(ctx, report)?;
        passes::render_shadows(ctx, report)?;
        passes::render_secondary_scene(ctx, report)?;
        passes::render_light_shafts(ctx, report)?;
        passes::render_composition1(ctx, report)?;

        if ctx.toggles.bloom_enabled() {
            passes::render_bloom(ctx, report)?;
        } else {
            report.record_skipped(PassId::BloomBrightPass);
            report.record_skipped(PassId::BloomBlurHorizontal);
            report.record_skipped(PassId::BloomBlurVertical);
        }

        passes::render_composition2(ctx, report)?;
        passes::render_color_graded_composition(ctx, report)
    }
}

impl Default for PassSequencer {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_transition(operation: &str, state: SequencerState) -> Error {
    engine_err!(InvalidState => "galaxy3d::PassSequencer", "cannot {} while {:?}", operation, state)
}

#[cfg(test)]
#[path = "pass_sequencer_tests.rs"]
mod tests;
