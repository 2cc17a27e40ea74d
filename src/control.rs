//! Spin, drag and zoom policy of the interactive viewer.
//!
//! [`SpinController`] turns user input into one [`FrameInput`] per frame.
//! It knows nothing about the window library: the presentation loop maps
//! its own events onto [`SpinController::begin_drag`],
//! [`SpinController::drag_to`], [`SpinController::end_drag`] and
//! [`SpinController::zoom`], then calls [`SpinController::advance`] once per
//! frame.

use std::f32::consts::TAU;

use crate::colors::Color;
use crate::config::RenderConfig;
use crate::frame::FrameInput;
use crate::math::mat4::Mat4;
use crate::projection::Projection;

/// Radians of rotation per pixel of mouse drag.
pub const DRAG_SENSITIVITY: f32 = 0.01;
/// Scale factor for one wheel step towards the viewer.
pub const ZOOM_IN_FACTOR: f32 = 1.1;
/// Scale factor for one wheel step away from the viewer.
pub const ZOOM_OUT_FACTOR: f32 = 0.9;
/// Hue advance per frame for the flat color.
pub const HUE_STEP: f32 = 0.02;

#[derive(Debug, Clone)]
pub struct SpinController {
    /// Rotation about X, Y and Z in radians.
    angles: [f32; 3],
    /// Autoplay spin per frame about X, Y and Z.
    spin_speed: [f32; 3],
    hue: f32,
    projection: Projection,
    min_scale: f32,
    max_scale: f32,
    /// Last pointer position while a drag is active.
    drag_anchor: Option<(i32, i32)>,
}

impl SpinController {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            angles: [0.0; 3],
            spin_speed: config.spin_speed,
            hue: 0.0,
            projection: config.projection(),
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            drag_anchor: None,
        }
    }

    /// Current rotation angles (x, y, z).
    pub fn angles(&self) -> [f32; 3] {
        self.angles
    }

    pub fn scale(&self) -> f32 {
        self.projection.scale
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn begin_drag(&mut self, x: i32, y: i32) {
        self.drag_anchor = Some((x, y));
    }

    /// Horizontal motion turns about Y, vertical motion about X.
    /// Ignored when no drag is active.
    pub fn drag_to(&mut self, x: i32, y: i32) {
        let Some((last_x, last_y)) = self.drag_anchor else {
            return;
        };
        let dx = (x - last_x) as f32;
        let dy = (y - last_y) as f32;
        self.angles[0] += dy * DRAG_SENSITIVITY;
        self.angles[1] += dx * DRAG_SENSITIVITY;
        self.drag_anchor = Some((x, y));
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Applies one wheel event. Positive `wheel` zooms in, negative zooms
    /// out, zero does nothing. The scale stays within the configured range.
    pub fn zoom(&mut self, wheel: i32) {
        let factor = match wheel.signum() {
            1 => ZOOM_IN_FACTOR,
            -1 => ZOOM_OUT_FACTOR,
            _ => return,
        };
        let scale = (self.projection.scale * factor).clamp(self.min_scale, self.max_scale);
        self.projection = self.projection.with_scale(scale);
    }

    /// Steps one frame and returns its input.
    ///
    /// All three axes spin unless a drag is active, in which case only Z
    /// keeps spinning. The model is `Rz · Ry · Rx`.
    pub fn advance(&mut self) -> FrameInput {
        if !self.is_dragging() {
            self.angles[0] += self.spin_speed[0];
            self.angles[1] += self.spin_speed[1];
        }
        self.angles[2] += self.spin_speed[2];
        self.hue += HUE_STEP;

        let [ax, ay, az] = self.angles;
        FrameInput::new(Mat4::rotation_xyz(ax, ay, az))
            .with_flat_color(Color::from_hue(self.hue))
            .with_projection(self.projection)
    }
}

/// Tracks one recording run, which ends once the model has made a full
/// turn about Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinRecording {
    start_z: f32,
}

impl SpinRecording {
    pub fn start(controller: &SpinController) -> Self {
        Self {
            start_z: controller.angles()[2],
        }
    }

    pub fn is_complete(&self, controller: &SpinController) -> bool {
        controller.angles()[2] - self.start_z >= TAU
    }
}
