/// SceneRenderer trait - world, sky, shadow, particle and water drawing
///
/// The scene renderer owns the scene, its lights, particle systems and
/// shadow maps. The composer only decides when each draw happens and
/// which render-target views feed it.

use std::sync::Arc;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use crate::error::Result;
use super::render_target::ImageView;
use super::texture::Texture;

/// Per-view constant block
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PerViewConstants {
    /// View matrix used for this draw (mirrored for reflections)
    pub view: Mat4,
    /// Main camera view matrix
    pub camera_view: Mat4,
    pub projection: Mat4,
    /// Eye position used for this draw (w unused)
    pub eye: Vec4,
    /// Clip plane, zero when clipping is off
    pub clip_plane: Vec4,
}

/// Per-effect constant block
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct EffectConstants {
    pub params0: Vec4,
    pub params1: Vec4,
}

impl EffectConstants {
    /// No effect parameters
    pub fn none() -> Self {
        Self::zeroed()
    }

    /// Sky renders only the sun disc (light-shaft occlusion source)
    pub fn sun_only() -> Self {
        Self { params0: Vec4::X, params1: Vec4::ZERO }
    }
}

/// Views shared by the water and transparent surface draws
#[derive(Debug, Clone, Copy)]
pub struct SurfaceInputs<'a> {
    pub shaded_scene: ImageView<'a>,
    pub reflection: ImageView<'a>,
    pub linear_depth: ImageView<'a>,
}

/// Scene renderer consumed by the composer
pub trait SceneRenderer: Send {
    // ===== PER-FRAME BOOKKEEPING =====

    fn update_scene(&mut self) -> Result<()>;
    fn update_lights(&mut self) -> Result<()>;
    fn synchronize_with_physics(&mut self) -> Result<()>;
    fn update_render_info(&mut self) -> Result<()>;
    fn update_skinned_buffers(&mut self) -> Result<()>;
    fn update_images(&mut self) -> Result<()>;

    /// Enable or disable particle simulation globally
    fn set_particle_systems_enabled(&mut self, hair: bool, emitters: bool);

    // ===== CONSTANTS =====

    fn update_per_view(&mut self, constants: &PerViewConstants) -> Result<()>;
    fn update_per_effect(&mut self, constants: &EffectConstants) -> Result<()>;

    // ===== DRAWS =====

    /// Draw opaque world geometry, unshaded, from `view`
    fn draw_world(&mut self, view: &Mat4) -> Result<()>;
    fn draw_sky(&mut self, eye: Vec3) -> Result<()>;
    fn clear_shadow_maps(&mut self) -> Result<()>;
    fn draw_for_shadow_map(&mut self) -> Result<()>;
    fn draw_volume_lights(&mut self, view: &Mat4) -> Result<()>;
    fn draw_soft_particles(&mut self, eye: Vec3, view: &Mat4, linear_depth: ImageView<'_>) -> Result<()>;
    fn draw_soft_premul_particles(&mut self, eye: Vec3, view: &Mat4, linear_depth: ImageView<'_>) -> Result<()>;
    fn draw_water_ripples(&mut self) -> Result<()>;
    fn draw_world_water(&mut self, view: &Mat4, inputs: &SurfaceInputs<'_>, ripples: ImageView<'_>) -> Result<()>;
    fn draw_world_transparent(&mut self, view: &Mat4, inputs: &SurfaceInputs<'_>) -> Result<()>;
    fn draw_lens_flares(&mut self, depth: ImageView<'_>, width: u32, height: u32) -> Result<()>;

    // ===== QUERIES =====

    /// True when the backend rasterizes lens flares itself
    fn native_lens_flares(&self) -> bool {
        false
    }

    /// Unit direction towards the sun
    fn sun_direction(&self) -> Vec3;

    /// Engine-provided color-grading lookup, if one is loaded
    fn color_grading(&self) -> Option<Arc<dyn Texture>>;

    /// Built-in neutral color-grading lookup
    fn default_color_grading(&self) -> Arc<dyn Texture>;
}
