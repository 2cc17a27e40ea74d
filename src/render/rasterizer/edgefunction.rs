//! Edge function-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's pixel bounding box, clamped to the buffer
//! 2. Reject zero-area triangles
//! 3. For every integer pixel (x, y) in the box, evaluate the barycentric
//!    weights; the pixel is inside when all three are `>= 0`
//! 4. Interpolate depth and hand the pixel to the frame buffer's depth test,
//!    which calls the shader only when the pixel is nearer
//!
//! # Barycentric Coordinates
//!
//! With `d = (p1.y - p2.y)(p0.x - p2.x) + (p2.x - p1.x)(p0.y - p2.y)`:
//!
//! ```text
//! w0 = ((p1.y - p2.y)(x - p2.x) + (p2.x - p1.x)(y - p2.y)) / d
//! w1 = ((p2.y - p0.y)(x - p2.x) + (p0.x - p2.x)(y - p2.y)) / d
//! w2 = 1 - w0 - w1
//! ```
//!
//! Dividing by the signed `d` makes the inside test independent of winding.
//! Weights of exactly zero count as inside, so a pixel on an edge shared by
//! two triangles is tested by both; the depth test decides who keeps it.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>

use super::shader::PixelShader;
use super::Triangle;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;

/// Barycentric basis of a screen-space triangle.
#[derive(Clone, Copy, Debug)]
pub struct Barycentric {
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    inv_denom: f32,
}

impl Barycentric {
    /// Returns `None` for a zero-area (or NaN) triangle.
    pub fn new(points: [Vec3; 3]) -> Option<Self> {
        let [p0, p1, p2] = points;
        let denom = (p1.y - p2.y) * (p0.x - p2.x) + (p2.x - p1.x) * (p0.y - p2.y);
        if denom == 0.0 || denom.is_nan() {
            return None;
        }
        Some(Self {
            p0,
            p1,
            p2,
            inv_denom: 1.0 / denom,
        })
    }

    /// Weights `[w0, w1, w2]` of the point (x, y).
    #[inline]
    pub fn weights(&self, x: f32, y: f32) -> [f32; 3] {
        let (p0, p1, p2) = (self.p0, self.p1, self.p2);
        let w0 = ((p1.y - p2.y) * (x - p2.x) + (p2.x - p1.x) * (y - p2.y)) * self.inv_denom;
        let w1 = ((p2.y - p0.y) * (x - p2.x) + (p0.x - p2.x) * (y - p2.y)) * self.inv_denom;
        [w0, w1, 1.0 - w0 - w1]
    }

    /// Interpolated depth for the given weights.
    #[inline]
    pub fn depth(&self, lambda: [f32; 3]) -> f32 {
        lambda[0] * self.p0.z + lambda[1] * self.p1.z + lambda[2] * self.p2.z
    }
}

/// Inclusive pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelRect {
    /// Integer rectangle covering the points (floor of the minimum, ceiling
    /// of the maximum), clamped to `[0, width - 1] x [0, height - 1]`.
    /// `None` if nothing of it lies inside the buffer.
    pub fn covering(points: &[Vec3; 3], width: u32, height: u32) -> Option<Self> {
        let [p0, p1, p2] = points;
        let min_x = (p0.x.min(p1.x).min(p2.x).floor() as i64).max(0);
        let max_x = (p0.x.max(p1.x).max(p2.x).ceil() as i64).min(width as i64 - 1);
        let min_y = (p0.y.min(p1.y).min(p2.y).floor() as i64).max(0);
        let max_y = (p0.y.max(p1.y).max(p2.y).ceil() as i64).min(height as i64 - 1);

        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Self {
            min_x: min_x as u32,
            min_y: min_y as u32,
            max_x: max_x as u32,
            max_y: max_y as u32,
        })
    }
}

/// Triangle rasterizer using the edge function algorithm.
///
/// Iterates over every pixel of the triangle's bounding box. Simple, handles
/// any winding, and gives barycentric weights for free.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    /// Fills a screen-space triangle with depth testing.
    ///
    /// Returns the number of pixels written, or `None` if the triangle has
    /// zero area and was skipped.
    pub fn fill_triangle<S: PixelShader>(
        &self,
        triangle: &Triangle,
        buffer: &mut FrameBuffer,
        shader: &S,
    ) -> Option<usize> {
        let bounds = PixelRect::covering(&triangle.points, buffer.width(), buffer.height());
        let basis = Barycentric::new(triangle.points)?;
        let Some(bounds) = bounds else {
            return Some(0);
        };

        let mut written = 0;
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                let lambda = basis.weights(x as f32, y as f32);
                if lambda[0] < 0.0 || lambda[1] < 0.0 || lambda[2] < 0.0 {
                    continue;
                }
                let z = basis.depth(lambda);
                if buffer.write_if_nearer(x, y, z, || shader.shade(lambda)) {
                    written += 1;
                }
            }
        }
        Some(written)
    }
}
