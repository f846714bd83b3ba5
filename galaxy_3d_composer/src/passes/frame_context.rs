/// Per-frame borrow bundle handed to every pass

use crate::camera::Camera;
use crate::config::{FeatureToggles, QualityConfig};
use crate::device::{GraphicsDevice, ImageView, RenderTarget, SceneRenderer};
use crate::error::Result;
use crate::target::{RenderTargetPool, TargetId};

/// Targets produced by the caller's scene rendering before composition
#[derive(Clone, Copy)]
pub struct SceneTargets<'a> {
    /// Main scene target; its depth buffer drives depth-tested passes
    pub main: &'a dyn RenderTarget,
    /// Lit scene color, base layer of composition-1
    pub shaded: &'a dyn RenderTarget,
}

impl<'a> SceneTargets<'a> {
    pub fn new(main: &'a dyn RenderTarget, shaded: &'a dyn RenderTarget) -> Self {
        Self { main, shaded }
    }
}

impl std::fmt::Debug for SceneTargets<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneTargets")
            .field("main", &self.main.label())
            .field("shaded", &self.shaded.label())
            .finish()
    }
}

/// Everything a pass may touch during one `compose()`
pub struct FrameContext<'a> {
    pub device: &'a mut dyn GraphicsDevice,
    pub renderer: &'a mut dyn SceneRenderer,
    pub camera: &'a Camera,
    pub pool: &'a RenderTargetPool,
    pub config: &'a QualityConfig,
    pub toggles: FeatureToggles,
    pub scene: SceneTargets<'a>,
    /// Screen size the pool was allocated for
    pub width: u32,
    pub height: u32,
}

impl<'a> FrameContext<'a> {
    /// Get a pool target
    pub fn target(&self, id: TargetId) -> Result<&'a dyn RenderTarget> {
        self.pool.require(id)
    }

    /// Depth view of the main scene target
    pub fn main_depth(&self) -> ImageView<'a> {
        ImageView::depth(self.scene.main)
    }

    /// Color view of the shaded scene
    pub fn shaded_scene(&self) -> ImageView<'a> {
        ImageView::front(self.scene.shaded)
    }
}
