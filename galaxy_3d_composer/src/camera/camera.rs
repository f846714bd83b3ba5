/// Camera - low-level passive data container.
///
/// The caller (game engine) computes the eye position, view matrix and
/// projection matrix. The composer only derives screen projections and
/// mirrored views from them.

use glam::{Mat4, Vec3};

/// Depth range used when projecting to the screen
const SCREEN_MIN_DEPTH: f32 = 0.1;
const SCREEN_MAX_DEPTH: f32 = 1.0;

/// A point projected into screen space.
///
/// `x`/`y` are pixels from the top-left corner, `depth` is remapped into
/// the screen depth range. `in_front` is false when the point lies behind
/// the camera, in which case x/y are meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub in_front: bool,
}

/// Low-level camera. A passive data container.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    pub fn new(eye: Vec3, view: Mat4, projection: Mat4) -> Self {
        Self {
            eye,
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    // ===== GETTERS =====

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== DERIVED =====

    /// View matrix of the camera mirrored by `reflection` (a world-space mirror)
    pub fn mirrored_view(&self, reflection: &Mat4) -> Mat4 {
        self.view_matrix * *reflection
    }

    /// Eye position mirrored by `reflection`
    pub fn mirrored_eye(&self, reflection: &Mat4) -> Vec3 {
        reflection.transform_point3(self.eye)
    }

    /// Project a world-space point onto a `width` x `height` screen.
    pub fn project_to_screen(&self, world: Vec3, width: f32, height: f32) -> ScreenPoint {
        let clip = self.view_projection_matrix() * world.extend(1.0);
        let in_front = clip.w > f32::EPSILON;
        let w = if in_front { clip.w } else { clip.w.abs().max(f32::EPSILON) };
        let ndc = clip.truncate() / w;

        ScreenPoint {
            x: (ndc.x * 0.5 + 0.5) * width,
            y: (0.5 - ndc.y * 0.5) * height,
            depth: SCREEN_MIN_DEPTH + ndc.z * (SCREEN_MAX_DEPTH - SCREEN_MIN_DEPTH),
            in_front,
        }
    }

    // ===== SETTERS (store only) =====

    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
