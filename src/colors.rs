//! RGBA colors and the byte-saturating arithmetic used when shading.

use serde::{Deserialize, Serialize};

pub const BACKGROUND: Color = Color::rgba(0, 0, 0, 255);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// An 8-bit-per-channel RGBA color, laid out in memory as `r, g, b, a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        BACKGROUND
    }
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::rgba(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Multiplies R, G and B by a light intensity. Alpha is forced opaque.
    #[inline]
    pub fn modulate(self, intensity: f32) -> Self {
        Self::rgb(
            scale_channel(self.r, intensity),
            scale_channel(self.g, intensity),
            scale_channel(self.b, intensity),
        )
    }

    /// Fallback flat color cycling through the hue wheel as `hue` advances.
    ///
    /// Each channel is a sine wave offset by 2.1 radians from the previous one.
    pub fn from_hue(hue: f32) -> Self {
        let wave = |offset: f32| to_channel(((hue + offset).sin() + 1.0) / 2.0 * 255.0);
        Self::rgb(wave(0.0), wave(2.1), wave(4.2))
    }
}

/// Converts a shaded channel value to a byte: clamped to `[0, 255]`,
/// truncated toward zero, NaN becomes 0.
#[inline]
pub fn to_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[inline]
fn scale_channel(channel: u8, intensity: f32) -> u8 {
    to_channel(channel as f32 * intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulate_truncates_toward_zero() {
        let c = Color::rgb(255, 100, 3).modulate(0.5);
        assert_eq!(c, Color::rgb(127, 50, 1));
    }

    #[test]
    fn modulate_forces_opaque_alpha() {
        let c = Color::rgba(10, 20, 30, 0).modulate(1.0);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn modulate_saturates_out_of_range_intensity() {
        assert_eq!(Color::rgb(200, 200, 200).modulate(2.0), WHITE);
        assert_eq!(Color::rgb(200, 200, 200).modulate(-1.0), Color::rgb(0, 0, 0));
        assert_eq!(Color::rgb(200, 200, 200).modulate(f32::NAN), Color::rgb(0, 0, 0));
    }

    #[test]
    fn hue_zero_matches_sine_offsets() {
        // sin(0) = 0 -> 127, sin(2.1) ~ 0.863 -> 237, sin(4.2) ~ -0.871 -> 16
        let c = Color::from_hue(0.0);
        assert_eq!(c.r, 127);
        assert_eq!(c.g, 237);
        assert_eq!(c.b, 16);
        assert_eq!(c.a, 255);
    }
}
