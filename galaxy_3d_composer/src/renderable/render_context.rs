/// Collaborators borrowed for one lifecycle call

use crate::camera::Camera;
use crate::device::{GraphicsDevice, SceneRenderer};

/// Device, scene renderer and camera, passed explicitly to every
/// lifecycle call instead of living in global state
pub struct RenderContext<'a> {
    pub device: &'a mut dyn GraphicsDevice,
    pub renderer: &'a mut dyn SceneRenderer,
    pub camera: &'a Camera,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        device: &'a mut dyn GraphicsDevice,
        renderer: &'a mut dyn SceneRenderer,
        camera: &'a Camera,
    ) -> Self {
        Self { device, renderer, camera }
    }
}
