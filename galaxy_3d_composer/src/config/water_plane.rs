/// Water plane used to mirror the camera for planar reflections.

use glam::{Mat4, Vec3, Vec4};

/// Plane `a*x + b*y + c*z + d = 0`, stored unnormalized.
///
/// Defaults to the horizontal plane through the origin, facing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterPlane {
    plane: Vec4,
}

impl WaterPlane {
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { plane: Vec4::new(a, b, c, d) }
    }

    /// Horizontal plane at the given height
    pub fn at_height(height: f32) -> Self {
        Self::new(0.0, 1.0, 0.0, -height)
    }

    /// Raw plane coefficients, uploaded as the reflection clip plane
    pub fn as_vec4(&self) -> Vec4 {
        self.plane
    }

    /// Plane with a unit-length normal. A degenerate plane yields the default.
    pub fn normalized(&self) -> Self {
        let length = self.plane.truncate().length();
        if length <= f32::EPSILON || !length.is_finite() {
            return Self::default();
        }
        Self { plane: self.plane / length }
    }

    /// Signed distance from a point to the plane
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        let n = self.normalized().plane;
        n.truncate().dot(point) + n.w
    }

    /// Matrix mirroring world space across the plane.
    pub fn reflection_matrix(&self) -> Mat4 {
        let p = self.normalized().plane;
        let (a, b, c, d) = (p.x, p.y, p.z, p.w);

        Mat4::from_cols(
            Vec4::new(1.0 - 2.0 * a * a, -2.0 * a * b, -2.0 * a * c, 0.0),
            Vec4::new(-2.0 * a * b, 1.0 - 2.0 * b * b, -2.0 * b * c, 0.0),
            Vec4::new(-2.0 * a * c, -2.0 * b * c, 1.0 - 2.0 * c * c, 0.0),
            Vec4::new(-2.0 * a * d, -2.0 * b * d, -2.0 * c * d, 1.0),
        )
    }
}

impl Default for WaterPlane {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }
}
