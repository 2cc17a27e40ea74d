//! Per-frame inputs to [`crate::Engine::render`].

use crate::colors::{self, Color};
use crate::math::mat4::Mat4;
use crate::projection::Projection;

/// Everything that may change from one frame to the next.
///
/// The engine keeps no memory of earlier inputs. Builder methods take and
/// return `self`:
///
/// ```ignore
/// let input = FrameInput::new(Mat4::rotation_xyz(ax, ay, az))
///     .with_flat_color(colors::RED)
///     .with_projection(projection.with_scale(40.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Object to world transform.
    pub model: Mat4,
    /// World to view transform. Identity unless set.
    pub view: Mat4,
    /// Base color when no texture is bound.
    pub flat_color: Color,
    /// Replaces the engine's configured projection for this frame only.
    pub projection: Option<Projection>,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::new(Mat4::identity())
    }
}

impl FrameInput {
    pub fn new(model: Mat4) -> Self {
        Self {
            model,
            view: Mat4::identity(),
            flat_color: colors::WHITE,
            projection: None,
        }
    }

    pub fn with_view(mut self, view: Mat4) -> Self {
        self.view = view;
        self
    }

    pub fn with_flat_color(mut self, color: Color) -> Self {
        self.flat_color = color;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }
}
