//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer handles the bounding box, barycentric weights, the
//! inside test and the depth test. The shader only turns the barycentric
//! weights of a visible pixel into a color.
//!
//! Both shaders interpolate the per-vertex light intensities
//! `B = λ₀·b₀ + λ₁·b₁ + λ₂·b₂` and multiply the base color by `B`.

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// The `lambda` parameter contains three weights [λ₀, λ₁, λ₂] that sum to
/// 1.0 inside the triangle and can interpolate any per-vertex attribute:
/// `attr_at_pixel = λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂`
pub trait PixelShader {
    fn shade(&self, lambda: [f32; 3]) -> Color;
}

#[inline]
fn interpolate(values: [f32; 3], lambda: [f32; 3]) -> f32 {
    lambda[0] * values[0] + lambda[1] * values[1] + lambda[2] * values[2]
}

/// One color for the whole mesh, lit per vertex.
pub struct FlatShader {
    color: Color,
    intensities: [f32; 3],
}

impl FlatShader {
    pub fn new(color: Color, intensities: [f32; 3]) -> Self {
        Self { color, intensities }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Color {
        self.color.modulate(interpolate(self.intensities, lambda))
    }
}

/// Modulated texture shader - nearest texel multiplied by lighting intensity.
pub struct TextureModulateShader<'a> {
    texture: &'a Texture,
    uvs: [Vec2; 3],
    intensities: [f32; 3],
}

impl<'a> TextureModulateShader<'a> {
    pub fn new(texture: &'a Texture, uvs: [Vec2; 3], intensities: [f32; 3]) -> Self {
        Self {
            texture,
            uvs,
            intensities,
        }
    }
}

impl PixelShader for TextureModulateShader<'_> {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Color {
        let uv = Vec2::weighted(self.uvs, lambda);
        let texel = self.texture.sample(uv.x, uv.y);
        texel.modulate(interpolate(self.intensities, lambda))
    }
}
