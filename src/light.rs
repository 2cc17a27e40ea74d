//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Intensity is the plain dot product of the unit surface normal with
/// `direction`, so with the default direction `(0, 0, -1)` surfaces whose
/// normals point down the negative view Z axis (toward the viewer) are fully lit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit direction the lit normals are compared against.
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::BACK)
    }
}

impl DirectionalLight {
    /// Create a new directional light. The direction is normalized.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalized_or_zero(),
        }
    }

    /// Light intensity for a unit normal, `max(0, normal · direction)`.
    ///
    /// Back-lit normals get 0, never a negative value. NaN normals also give 0.
    #[inline]
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction).max(0.0)
    }
}
