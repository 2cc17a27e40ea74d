//! Triangle mesh data: positions, per-vertex UVs and index triples.
//!
//! A [`Mesh`] is validated once on construction and is read-only
//! afterwards. The renderer indexes it without further bounds checks.

use std::path::Path;

use thiserror::Error;

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Errors from constructing a mesh out of raw arrays.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("mesh has {positions} positions but {uvs} texture coordinates")]
    UvCountMismatch { positions: usize, uvs: usize },
}

/// Errors from loading a mesh from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("OBJ file contains no geometry")]
    Empty,
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// A triangle as three indices into the mesh's vertex arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.a as usize, self.b as usize, self.c as usize]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    uvs: Vec<Vec2>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Builds a mesh, checking that every face index is in range.
    ///
    /// `uvs` must either be empty (every vertex then gets UV `(0, 0)`) or
    /// hold exactly one entry per position.
    pub fn new(positions: Vec<Vec3>, uvs: Vec<Vec2>, faces: Vec<Face>) -> Result<Self, MeshError> {
        let uvs = if uvs.is_empty() {
            vec![Vec2::ZERO; positions.len()]
        } else if uvs.len() != positions.len() {
            return Err(MeshError::UvCountMismatch {
                positions: positions.len(),
                uvs: uvs.len(),
            });
        } else {
            uvs
        };

        let vertex_count = positions.len();
        for (face_index, face) in faces.iter().enumerate() {
            for index in [face.a, face.b, face.c] {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfRange {
                        face: face_index,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        Ok(Self {
            positions,
            uvs,
            faces,
        })
    }

    /// A cube spanning `[-1, 1]` on every axis, wound so that every face
    /// points outward and carries its own `[0, 1]` UV square.
    pub fn cube() -> Self {
        // (outward normal axis, two in-plane axes) per face, ordered so that
        // u x v points along the normal.
        const SIDES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
            (Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
            (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0)),
            (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
            (Vec3::new(0.0, -1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
            (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0)),
        ];

        let mut positions = Vec::with_capacity(24);
        let mut uvs = Vec::with_capacity(24);
        let mut faces = Vec::with_capacity(12);

        for (normal, u_axis, v_axis) in SIDES {
            let base = positions.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                positions.push(normal + u_axis * su + v_axis * sv);
                uvs.push(Vec2::new((su + 1.0) / 2.0, (sv + 1.0) / 2.0));
            }
            faces.push(Face::new(base, base + 1, base + 2));
            faces.push(Face::new(base, base + 2, base + 3));
        }

        Self {
            positions,
            uvs,
            faces,
        }
    }

    /// Load every object in an OBJ file and merge them into one mesh.
    ///
    /// Polygons are triangulated. V is flipped so that UV `(0, 0)` addresses
    /// the top-left texel of an image loaded with [`crate::texture::Texture`].
    pub fn from_obj<P: AsRef<Path>>(file_path: P) -> Result<Self, LoadError> {
        let path = file_path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)?;

        let mut positions = Vec::new();
        let mut uvs = Vec::new();
        let mut faces = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = positions.len() as u32;
            let vertex_count = mesh.positions.len() / 3;

            positions.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );

            if mesh.texcoords.len() / 2 == vertex_count {
                uvs.extend(
                    mesh.texcoords
                        .chunks_exact(2)
                        .map(|t| Vec2::new(t[0], 1.0 - t[1])),
                );
            } else {
                uvs.extend(std::iter::repeat(Vec2::ZERO).take(vertex_count));
            }

            faces.extend(
                mesh.indices
                    .chunks_exact(3)
                    .map(|i| Face::new(base + i[0], base + i[1], base + i[2])),
            );
        }

        if faces.is_empty() {
            return Err(LoadError::Empty);
        }

        let mesh = Self::new(positions, uvs, faces)?;
        log::info!(
            "Loaded {:?}: {} objects, {} vertices, {} triangles",
            path,
            models.len(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_out_of_range_index() {
        let err = Mesh::new(
            vec![Vec3::ZERO, Vec3::ONE, Vec3::FORWARD],
            vec![],
            vec![Face::new(0, 1, 3)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                face: 0,
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn rejects_mismatched_uvs() {
        let err = Mesh::new(vec![Vec3::ZERO; 3], vec![Vec2::ZERO; 2], vec![]).unwrap_err();
        assert_eq!(err, MeshError::UvCountMismatch { positions: 3, uvs: 2 });
    }

    #[test]
    fn missing_uvs_default_to_origin() {
        let mesh = Mesh::new(vec![Vec3::ZERO; 3], vec![], vec![Face::new(0, 1, 2)]).unwrap();
        assert_eq!(mesh.uvs(), &[Vec2::ZERO; 3]);
    }

    #[test]
    fn cube_faces_point_outward() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.face_count(), 12);

        for face in cube.faces() {
            let [a, b, c] = face.indices().map(|i| cube.positions()[i]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward face {face:?}");
        }
    }

    #[test]
    fn cube_uvs_span_unit_square() {
        let cube = Mesh::cube();
        for uv in cube.uvs() {
            assert!((0.0..=1.0).contains(&uv.x));
            assert!((0.0..=1.0).contains(&uv.y));
        }
        assert_relative_eq!(cube.uvs()[2].x, 1.0);
        assert_relative_eq!(cube.uvs()[2].y, 1.0);
    }

    #[test]
    fn loads_and_merges_obj_objects() {
        let path = std::env::temp_dir().join("spinraster_mesh_test.obj");
        std::fs::write(
            &path,
            "o first\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nf 1/1 2/2 3/3\n\
             o second\nv 0 0 1\nv 1 0 1\nv 1 1 1\nv 0 1 1\nf 4 5 6 7\n",
        )
        .unwrap();

        let mesh = Mesh::from_obj(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // One triangle plus a triangulated quad.
        assert_eq!(mesh.face_count(), 3);
        for face in mesh.faces() {
            for i in face.indices() {
                assert!(i < mesh.vertex_count());
            }
        }
        // V is flipped on load.
        assert!(mesh.uvs().iter().any(|uv| uv.x == 0.0 && uv.y == 1.0));
    }

    #[test]
    fn missing_obj_file_is_an_error() {
        let result = Mesh::from_obj("/nonexistent/spinraster/missing.obj");
        assert!(matches!(result, Err(LoadError::Obj(_))));
    }
}
