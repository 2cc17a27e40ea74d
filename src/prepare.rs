//! Mesh preparation: view-space vertices, smooth vertex normals and
//! per-vertex light intensity.
//!
//! Everything here is recomputed every frame from the current mesh and
//! transforms. [`PreparedMesh`] keeps its vectors between frames only so the
//! allocations can be reused.

use crate::light::DirectionalLight;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;

#[derive(Debug, Default, Clone)]
pub struct PreparedMesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    intensities: Vec<f32>,
}

impl PreparedMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the preparation stage for one frame, overwriting the previous
    /// frame's results.
    ///
    /// 1. Every vertex goes through `view · model`.
    /// 2. Each face's unnormalized normal `(v1 - v0) x (v2 - v0)` is summed
    ///    into its three vertices, which weights it by face area.
    /// 3. The sums are normalized (zero sums stay zero).
    /// 4. Intensity is `max(0, normal · light)`.
    pub fn prepare(&mut self, mesh: &Mesh, model: &Mat4, view: &Mat4, light: &DirectionalLight) {
        let model_view = Mat4::compose(*view, *model);

        self.positions.clear();
        self.positions.extend(
            mesh.positions()
                .iter()
                .map(|&p| model_view.transform_point(p)),
        );

        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);
        for face in mesh.faces() {
            let [i0, i1, i2] = face.indices();
            let v0 = self.positions[i0];
            let face_normal = (self.positions[i1] - v0).cross(self.positions[i2] - v0);
            self.normals[i0] += face_normal;
            self.normals[i1] += face_normal;
            self.normals[i2] += face_normal;
        }
        for normal in &mut self.normals {
            *normal = normal.normalized_or_zero();
        }

        self.intensities.clear();
        self.intensities
            .extend(self.normals.iter().map(|&n| light.intensity(n)));
    }

    /// View-space vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Unit vertex normals in view space (zero for unreferenced vertices).
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Light intensity per vertex, never negative.
    pub fn intensities(&self) -> &[f32] {
        &self.intensities
    }
}
