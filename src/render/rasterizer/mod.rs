//! Triangle rasterization.
//!
//! [`EdgeFunctionRasterizer`] walks each triangle's bounding box and
//! delegates per-pixel color to a [`PixelShader`].

mod edgefunction;
mod shader;

pub use edgefunction::{Barycentric, EdgeFunctionRasterizer, PixelRect};
pub use shader::{FlatShader, PixelShader, TextureModulateShader};

use crate::math::vec3::Vec3;

/// A triangle ready for rasterization in screen space.
///
/// `x` and `y` are pixel coordinates, `z` is the projected depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
}

impl Triangle {
    pub fn new(points: [Vec3; 3]) -> Self {
        Self { points }
    }
}
