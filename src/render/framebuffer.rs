//! Color and depth buffers for one fixed-size frame.
//!
//! The color buffer is packed RGBA bytes, row-major, top row first, so it
//! can be uploaded to a display texture or wrapped as an image directly.
//! The depth buffer stores the projected `z'` of the nearest surface drawn
//! so far. Smaller is nearer, and [`FAR_DEPTH`] marks an empty pixel.

use crate::colors::Color;

/// Depth of a pixel nothing has been drawn to.
pub const FAR_DEPTH: f32 = f32::INFINITY;

pub struct FrameBuffer {
    color_buffer: Vec<u8>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
    clear_color: Color,
}

impl FrameBuffer {
    /// Allocates both buffers, already cleared.
    pub fn new(width: u32, height: u32, clear_color: Color) -> Self {
        let size = width as usize * height as usize;
        let mut color_buffer = Vec::with_capacity(size * 4);
        for _ in 0..size {
            color_buffer.extend_from_slice(&clear_color.to_bytes());
        }
        Self {
            color_buffer,
            depth_buffer: vec![FAR_DEPTH; size],
            width,
            height,
            clear_color,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Takes effect on the next [`FrameBuffer::clear`].
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Resets every pixel to the clear color and every depth to [`FAR_DEPTH`].
    pub fn clear(&mut self) {
        let bytes = self.clear_color.to_bytes();
        for pixel in self.color_buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
        self.depth_buffer.fill(FAR_DEPTH);
    }

    /// Depth-tested write at (x, y).
    ///
    /// If `depth` is strictly less than the stored depth, the depth is stored
    /// and `shade` is called to produce the color written to the same pixel.
    /// Otherwise nothing changes and `shade` is not called. Returns whether
    /// the pixel was written. Coordinates must be inside the buffer.
    #[inline]
    pub fn write_if_nearer(
        &mut self,
        x: u32,
        y: u32,
        depth: f32,
        shade: impl FnOnce() -> Color,
    ) -> bool {
        let idx = (y * self.width + x) as usize;
        if depth >= self.depth_buffer[idx] {
            return false;
        }
        self.depth_buffer[idx] = depth;
        let color = shade().to_bytes();
        self.color_buffer[idx * 4..idx * 4 + 4].copy_from_slice(&color);
        true
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            let i = (y * self.width + x) as usize * 4;
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&self.color_buffer[i..i + 4]);
            Some(Color::from_bytes(bytes))
        } else {
            None
        }
    }

    /// Get the depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.depth_buffer[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Packed RGBA bytes, `width * height * 4` long.
    pub fn color_bytes(&self) -> &[u8] {
        &self.color_buffer
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Copies the color buffer into an image for encoding.
    pub fn to_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.color_buffer.clone())
    }
}
