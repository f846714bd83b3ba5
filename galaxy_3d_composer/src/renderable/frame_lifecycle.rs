/// Base lifecycle hooks run before the composer's own work.
///
/// Every hook defaults to a no-op. An application implements the hooks it
/// needs (for example to render the main scene before composition) and
/// hands the implementation to `Renderable3D::new()`.

use crate::error::Result;
use super::render_context::RenderContext;

pub trait FrameLifecycle: Send {
    /// Called before the render targets are allocated
    fn initialize(&mut self, _ctx: &mut RenderContext<'_>, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn load(&mut self, _ctx: &mut RenderContext<'_>) -> Result<()> {
        Ok(())
    }

    fn start(&mut self, _ctx: &mut RenderContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called before the scene renderer's per-frame bookkeeping
    fn update(&mut self, _ctx: &mut RenderContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called before the pass sequence
    fn compose(&mut self, _ctx: &mut RenderContext<'_>) -> Result<()> {
        Ok(())
    }
}

/// Lifecycle without base behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLifecycle;

impl FrameLifecycle for NoOpLifecycle {}
