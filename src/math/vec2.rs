/// A 2D vector, used for texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Weighted sum of three vectors, e.g. a UV interpolated with
    /// barycentric weights.
    #[inline]
    pub fn weighted(values: [Vec2; 3], weights: [f32; 3]) -> Self {
        Self {
            x: weights[0] * values[0].x + weights[1] * values[1].x + weights[2] * values[2].x,
            y: weights[0] * values[0].y + weights[1] * values[1].y + weights[2] * values[2].y,
        }
    }
}
