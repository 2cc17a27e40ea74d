//! Pinhole perspective projection.
//!
//! The [`Projection`] struct holds the tunables of the perspective divide:
//! a focal constant (`fov`), a uniform distance `scale`, and a `z_offset`
//! that pushes the scene in front of the eye. There is no projection matrix
//! and no clipping: a vertex whose offset depth approaches zero projects to
//! huge or non-finite screen coordinates.

use crate::math::vec3::Vec3;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Focal constant, in pixels per unit of `x / z`.
    pub fov: f32,
    /// Uniform scale applied to view-space coordinates before the divide.
    pub scale: f32,
    /// Added to the scaled depth so the scene sits in front of the eye.
    pub z_offset: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(200.0, 25.0, 200.0)
    }
}

impl Projection {
    pub fn new(fov: f32, scale: f32, z_offset: f32) -> Self {
        Self {
            fov,
            scale,
            z_offset,
        }
    }

    /// Returns a copy with a different distance scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Projects a view-space point to screen space.
    ///
    /// ```text
    /// z' = p.z * scale + z_offset
    /// x  = p.x * scale * fov / z' + center.0
    /// y  = p.y * scale * fov / z' + center.1
    /// ```
    ///
    /// The returned `z` is `z'`, kept for depth testing (smaller is nearer).
    #[inline]
    pub fn project(&self, p: Vec3, center: (f32, f32)) -> Vec3 {
        let z = p.z * self.scale + self.z_offset;
        Vec3::new(
            (p.x * self.scale) * self.fov / z + center.0,
            (p.y * self.scale) * self.fov / z + center.1,
            z,
        )
    }

    /// Projects every point into `out`, replacing its previous contents.
    pub fn project_into(&self, points: &[Vec3], center: (f32, f32), out: &mut Vec<Vec3>) {
        out.clear();
        out.extend(points.iter().map(|&p| self.project(p, center)));
    }
}

/// Screen center used by the projection: integer half of each dimension.
pub fn screen_center(width: u32, height: u32) -> (f32, f32) {
    ((width / 2) as f32, (height / 2) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_projects_to_center() {
        let proj = Projection::default();
        let p = proj.project(Vec3::ZERO, (400.0, 300.0));
        assert_relative_eq!(p.x, 400.0);
        assert_relative_eq!(p.y, 300.0);
        assert_relative_eq!(p.z, 200.0);
    }

    #[test]
    fn divide_follows_offset_depth() {
        let proj = Projection::new(200.0, 25.0, 200.0);
        let p = proj.project(Vec3::new(1.0, -1.0, -5.0), (100.0, 100.0));
        // z' = -125 + 200 = 75, 25 * 200 / 75 = 66.67
        assert_relative_eq!(p.z, 75.0);
        assert_relative_eq!(p.x, 100.0 + 200.0 / 3.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 100.0 - 200.0 / 3.0, epsilon = 1e-4);
    }

    #[test]
    fn farther_points_shrink_toward_center() {
        let proj = Projection::default();
        let near = proj.project(Vec3::new(1.0, 0.0, -2.0), (0.0, 0.0));
        let far = proj.project(Vec3::new(1.0, 0.0, 2.0), (0.0, 0.0));
        assert!(near.z < far.z);
        assert!(near.x > far.x);
    }

    #[test]
    fn zero_depth_is_not_guarded() {
        let proj = Projection::new(200.0, 25.0, 0.0);
        let p = proj.project(Vec3::new(1.0, 0.0, 0.0), (0.0, 0.0));
        assert!(!p.x.is_finite());
    }

    #[test]
    fn center_uses_integer_half() {
        assert_eq!(screen_center(801, 601), (400.0, 300.0));
    }

    #[test]
    fn project_into_replaces_contents() {
        let proj = Projection::default();
        let mut out = vec![Vec3::ONE; 5];
        proj.project_into(&[Vec3::ZERO, Vec3::ZERO], (0.0, 0.0), &mut out);
        assert_eq!(out.len(), 2);
    }
}
