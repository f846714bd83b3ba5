/// GraphicsDevice trait - render-target allocation and full-screen image draws

use crate::error::Result;
use super::image_effects::ImageEffects;
use super::render_target::{ImageView, RenderTarget, RenderTargetDesc};

/// Clear color applied by `activate()` when the caller passes `None`
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Device layer consumed by the composer
///
/// Implemented by backend-specific devices. Submission is fire-and-forget:
/// fences and barriers between an activation and later reads of the same
/// target are the device's responsibility.
pub trait GraphicsDevice: Send {
    /// Allocate a render target
    ///
    /// # Errors
    ///
    /// Allocation failure (out of memory, unsupported format) is reported
    /// as an error and must not leave a partially created target behind.
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Box<dyn RenderTarget>>;

    /// Bind `target` as the current output and clear its color
    ///
    /// # Arguments
    ///
    /// * `depth` - Target whose depth buffer is bound for depth testing.
    ///   With `None`, a target that owns a depth buffer (`has_depth()`)
    ///   binds and clears its own; other targets draw without depth.
    /// * `clear_color` - Clear color, `None` for `DEFAULT_CLEAR_COLOR`
    fn activate(
        &mut self,
        target: &dyn RenderTarget,
        depth: Option<&dyn RenderTarget>,
        clear_color: Option<[f32; 4]>,
    ) -> Result<()>;

    /// Bind the presentation surface (swapchain back buffer) as output
    fn activate_output(&mut self) -> Result<()>;

    /// Start a batch of image draws sharing pipeline state
    fn batch_begin(&mut self);

    /// Draw `source` over the whole active output
    fn draw_image(&mut self, source: ImageView<'_>, effects: &ImageEffects) -> Result<()>;

    /// Regenerate the mip chain of `target` from its first level
    fn generate_mips(&mut self, target: &dyn RenderTarget) -> Result<()>;
}
