/// Device module - the external rendering boundary consumed by the composer
///
/// The composer never talks to a GPU API directly. It allocates render
/// targets and issues full-screen image draws through `GraphicsDevice`,
/// and delegates world/sky/particle/water drawing to `SceneRenderer`.

// Module declarations
pub mod texture;
pub mod render_target;
pub mod image_effects;
pub mod graphics_device;
pub mod scene_renderer;

// Re-export everything
pub use texture::*;
pub use render_target::*;
pub use image_effects::*;
pub use graphics_device::*;
pub use scene_renderer::*;

// Mock device and renderer for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;
