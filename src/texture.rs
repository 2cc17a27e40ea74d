use std::path::Path;

use thiserror::Error;

use crate::colors::Color;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture must have non-zero size, got {width}x{height}")]
    EmptySize { width: u32, height: u32 },
    #[error("expected {expected} bytes of RGBA data for the texture, got {actual}")]
    DataSize { expected: usize, actual: usize },
    #[error("failed to decode texture image: {0}")]
    Image(#[from] image::ImageError),
}

/// Represents a 2D RGBA texture for texture mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    data: Vec<u8>, // Row-major RGBA bytes, top row first.
    width: u32,
    height: u32,
}

impl Texture {
    /// Wraps raw RGBA bytes, four per texel.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::EmptySize { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(TextureError::DataSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        log::info!("Loaded texture {}x{} from {:?}", width, height, path);
        Self::from_rgba(width, height, img.into_raw())
    }

    /// Maps a UV coordinate to the nearest texel: `(trunc(u * (w - 1)), trunc(v * (h - 1)))`.
    ///
    /// UV `(0, 0)` is the top-left texel and `(1, 1)` the bottom-right one.
    /// Coordinates outside `[0, 1]` (or NaN) are clamped into the texture.
    #[inline]
    pub fn texel_coords(&self, u: f32, v: f32) -> (u32, u32) {
        let x = ((u * (self.width - 1) as f32) as u32).min(self.width - 1);
        let y = ((v * (self.height - 1) as f32) as u32).min(self.height - 1);
        (x, y)
    }

    #[inline]
    pub fn texel(&self, x: u32, y: u32) -> Color {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Color::rgba(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let (x, y) = self.texel_coords(u, v);
        self.texel(x, y)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
