//! Render passes of the composed frame
//!
//! One file per stage. Every pass activates its single output, reads
//! previously produced images and issues draws through the device and
//! the scene renderer carried by `FrameContext`. Gating on the feature
//! toggles happens inside each stage; skipped passes are recorded in the
//! `FrameReport`.

mod frame_context;
mod reflections;
mod shadows;
mod secondary_scene;
mod light_shafts;
mod composition;
mod bloom;

pub use frame_context::{FrameContext, SceneTargets};
pub use composition::{composition1_layers, CompositionLayer};

pub(crate) use reflections::render_reflections;
pub(crate) use shadows::render_shadows;
pub(crate) use secondary_scene::render_secondary_scene;
pub(crate) use light_shafts::render_light_shafts;
pub(crate) use composition::{render_composition1, render_composition2, render_color_graded_composition};
pub(crate) use bloom::render_bloom;

/// Distance along the sun direction used to place the sun on screen
pub const SUN_DISTANCE: f32 = 100_000.0;

/// Clear color of the alpha-blended particle target
pub const ALPHA_PARTICLE_CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Clear color of the additive particle target
pub const ADDITIVE_PARTICLE_CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[cfg(test)]
#[path = "passes_tests.rs"]
mod tests;
