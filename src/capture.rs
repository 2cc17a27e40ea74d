//! Writes rendered frames to disk as numbered PNG files.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::render::FrameBuffer;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to prepare capture directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode frame: {0}")]
    Image(#[from] image::ImageError),
    #[error("color buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

/// Saves frames as `frame_00000.png`, `frame_00001.png`, ... in one
/// directory.
#[derive(Debug)]
pub struct FrameRecorder {
    dir: PathBuf,
    frames_written: usize,
}

impl FrameRecorder {
    /// Creates `dir` (and its parents) if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, CaptureError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        log::info!("Recording frames to {:?}", dir);
        Ok(Self {
            dir,
            frames_written: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Path the next captured frame will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", self.frames_written))
    }

    /// Encodes the frame buffer's current contents as the next PNG.
    pub fn capture(&mut self, framebuffer: &FrameBuffer) -> Result<PathBuf, CaptureError> {
        let image = framebuffer.to_image().ok_or(CaptureError::BufferSize {
            width: framebuffer.width(),
            height: framebuffer.height(),
        })?;
        let path = self.next_path();
        image.save(&path)?;
        self.frames_written += 1;
        log::debug!("Captured frame {} to {:?}", self.frames_written, path);
        Ok(path)
    }
}
