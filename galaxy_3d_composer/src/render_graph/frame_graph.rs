/// Frame graph - ordered pass declarations of one composed frame.
///
/// Built once by `FrameGraph::standard()` and validated before the
/// sequencer accepts it. Passes execute in declaration order; the graph
/// checks that this order is consistent with the declared data flow.

use rustc_hash::{FxHashMap, FxHashSet};
use crate::device::ImageSlice;
use crate::error::{Error, Result};
use crate::engine_err;
use crate::target::TargetId;
use super::pass_id::PassId;
use super::render_pass::{RenderPass, PassOutput};

/// Ordered list of pass declarations
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGraph {
    passes: Vec<RenderPass>,
}

impl FrameGraph {
    /// Build a graph from passes listed in execution order
    pub fn from_passes(passes: Vec<RenderPass>) -> Self {
        Self { passes }
    }

    /// The composer's frame
    pub fn standard() -> Self {
        use ImageSlice::{Back, Front};
        use PassOutput::{FinalOutput, ShadowMaps, Target};

        let passes = vec![
            RenderPass::new(PassId::Reflections, Target(TargetId::Reflection)),
            RenderPass::new(PassId::Shadows, ShadowMaps),

            // Secondary scene
            RenderPass::new(PassId::LensFlare, Target(TargetId::LensFlare))
                .reads_main_depth(),
            RenderPass::new(PassId::VolumeLights, Target(TargetId::VolumeLights))
                .reads_main_depth(),
            RenderPass::new(PassId::AlphaParticles, Target(TargetId::AlphaParticles))
                .reads(TargetId::LinearDepth, Back),
            RenderPass::new(PassId::AdditiveParticles, Target(TargetId::AdditiveParticles))
                .reads(TargetId::LinearDepth, Back),
            RenderPass::new(PassId::WaterRipples, Target(TargetId::WaterRipples)),
            RenderPass::new(PassId::Water, Target(TargetId::Water))
                .reads_shaded_scene()
                .reads(TargetId::Reflection, Front)
                .reads(TargetId::LinearDepth, Back)
                .reads(TargetId::WaterRipples, Back)
                .reads_main_depth(),
            RenderPass::new(PassId::Transparents, Target(TargetId::Transparents))
                .reads_shaded_scene()
                .reads(TargetId::Reflection, Front)
                .reads(TargetId::LinearDepth, Back)
                .reads_main_depth(),

            // Light shafts
            RenderPass::new(PassId::SunOcclusion, Target(TargetId::SunOcclusion))
                .reads_main_depth(),
            RenderPass::new(PassId::LightShaftBlur, Target(TargetId::LightShafts))
                .reads(TargetId::SunOcclusion, Back),

            RenderPass::new(PassId::Composition1, Target(TargetId::Composition1))
                .reads_shaded_scene()
                .reads(TargetId::Ssr, Back)
                .reads(TargetId::Water, Back)
                .reads(TargetId::Transparents, Back)
                .reads(TargetId::AlphaParticles, Back)
                .reads(TargetId::VolumeLights, Back)
                .reads(TargetId::AdditiveParticles, Back)
                .reads(TargetId::LightShafts, Back)
                .reads(TargetId::LensFlare, Back),

            // Bloom
            RenderPass::new(PassId::BloomBrightPass, Target(TargetId::BloomBright))
                .reads(TargetId::Composition1, Front),
            RenderPass::new(PassId::BloomBlurHorizontal, Target(TargetId::BloomBlurHorizontal))
                .reads(TargetId::BloomBright, Back),
            RenderPass::new(PassId::BloomBlurVertical, Target(TargetId::BloomBlurVertical))
                .reads(TargetId::BloomBlurHorizontal, Back),

            RenderPass::new(PassId::Composition2, Target(TargetId::Composition2))
                .reads(TargetId::Composition1, Back)
                .reads(TargetId::BloomBlurVertical, Back),
            RenderPass::new(PassId::ColorGrading, FinalOutput)
                .reads(TargetId::Composition2, Back),
        ];

        Self { passes }
    }

    /// Get all passes, in execution order
    pub fn passes(&self) -> &[RenderPass] {
        &self.passes
    }

    /// Get a pass by id
    pub fn pass(&self, id: PassId) -> Option<&RenderPass> {
        self.passes.iter().find(|p| p.id() == id)
    }

    /// Execution position of a pass
    pub fn position(&self, id: PassId) -> Option<usize> {
        self.passes.iter().position(|p| p.id() == id)
    }

    /// Pass writing `target`, if any
    ///
    /// Targets without a writer (linear depth, SSR, SSAO, depth copy) are
    /// produced by the caller's scene rendering before composition.
    pub fn writer_of(&self, target: TargetId) -> Option<PassId> {
        self.passes
            .iter()
            .find(|p| p.output_target() == Some(target))
            .map(|p| p.id())
    }

    /// Passes reading `target`, in execution order
    pub fn readers_of(&self, target: TargetId) -> Vec<PassId> {
        self.passes
            .iter()
            .filter(|p| p.pool_inputs().any(|t| t == target))
            .map(|p| p.id())
            .collect()
    }

    /// Check the declared data flow
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` when a pass id appears twice, a target
    /// has more than one writer, a pass reads its own output or a target
    /// before its writer ran, or the final output is not written exactly
    /// once by the last pass.
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        let mut writers: FxHashMap<TargetId, usize> = FxHashMap::default();

        for (index, pass) in self.passes.iter().enumerate() {
            if !seen.insert(pass.id()) {
                return Err(invalid(format!("pass '{}' declared twice", pass.id())));
            }
            if let Some(target) = pass.output_target() {
                if writers.insert(target, index).is_some() {
                    return Err(invalid(format!("target '{}' has more than one writer", target)));
                }
            }
        }

        for (index, pass) in self.passes.iter().enumerate() {
            for target in pass.pool_inputs() {
                match writers.get(&target) {
                    Some(&writer) if writer == index => {
                        return Err(invalid(format!(
                            "pass '{}' reads its own output '{}'", pass.id(), target)));
                    }
                    Some(&writer) if writer > index => {
                        return Err(invalid(format!(
                            "pass '{}' reads '{}' before '{}' writes it",
                            pass.id(), target, self.passes[writer].id())));
                    }
                    _ => {}
                }
            }
        }

        let finals: Vec<usize> = self.passes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.output() == PassOutput::FinalOutput)
            .map(|(i, _)| i)
            .collect();
        if finals.len() != 1 || finals[0] + 1 != self.passes.len() {
            return Err(invalid("final output must be written once, by the last pass".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> Error {
    engine_err!(InvalidResource => "galaxy3d::FrameGraph", "{}", message)
}

#[cfg(test)]
#[path = "frame_graph_tests.rs"]
mod tests;
