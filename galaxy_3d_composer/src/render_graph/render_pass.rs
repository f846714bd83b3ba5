/// Render pass node in the frame graph.
///
/// Declares which images a pass reads (each with a slice selector) and
/// the single output it writes. Not to be confused with a GPU render
/// pass: one node may issue several draws into its output.

use crate::device::ImageSlice;
use crate::target::TargetId;
use super::pass_id::PassId;

/// Where a pass input comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetSource {
    /// Composer-owned pool target
    Pool(TargetId),
    /// Caller-provided main scene target (its depth buffer)
    MainScene,
    /// Caller-provided shaded scene color
    ShadedScene,
}

/// One declared read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassInput {
    pub source: TargetSource,
    pub slice: ImageSlice,
}

/// The single write of a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassOutput {
    /// Composer-owned pool target
    Target(TargetId),
    /// Shadow maps owned by the scene renderer
    ShadowMaps,
    /// Device output (swapchain)
    FinalOutput,
}

/// Pass declaration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    id: PassId,
    inputs: Vec<PassInput>,
    output: PassOutput,
}

impl RenderPass {
    pub(crate) fn new(id: PassId, output: PassOutput) -> Self {
        Self {
            id,
            inputs: Vec::new(),
            output,
        }
    }

    /// Declare a read of a pool target
    pub(crate) fn reads(mut self, target: TargetId, slice: ImageSlice) -> Self {
        self.inputs.push(PassInput { source: TargetSource::Pool(target), slice });
        self
    }

    /// Declare a read of the main scene depth buffer
    pub(crate) fn reads_main_depth(mut self) -> Self {
        self.inputs.push(PassInput { source: TargetSource::MainScene, slice: ImageSlice::Depth });
        self
    }

    /// Declare a read of the shaded scene color
    pub(crate) fn reads_shaded_scene(mut self) -> Self {
        self.inputs.push(PassInput { source: TargetSource::ShadedScene, slice: ImageSlice::Front });
        self
    }

    pub fn id(&self) -> PassId {
        self.id
    }

    /// Get the declared reads, in draw order
    pub fn inputs(&self) -> &[PassInput] {
        &self.inputs
    }

    pub fn output(&self) -> PassOutput {
        self.output
    }

    /// Pool targets read by this pass
    pub fn pool_inputs(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.inputs.iter().filter_map(|input| match input.source {
            TargetSource::Pool(id) => Some(id),
            _ => None,
        })
    }

    /// Pool target written by this pass, if any
    pub fn output_target(&self) -> Option<TargetId> {
        match self.output {
            PassOutput::Target(id) => Some(id),
            _ => None,
        }
    }
}
