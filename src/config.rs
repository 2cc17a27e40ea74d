//! Renderer configuration, loaded from RON.
//!
//! ```ron
//! (
//!     width: 640,
//!     height: 480,
//!     scale: 40.0,
//!     clear_color: (r: 16, g: 16, b: 24, a: 255),
//! )
//! ```
//!
//! Missing fields take their [`Default`] value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::colors::{self, Color};
use crate::projection::Projection;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Frame buffer width in pixels, fixed for the engine's lifetime.
    pub width: u32,
    /// Frame buffer height in pixels, fixed for the engine's lifetime.
    pub height: u32,
    /// Focal constant of the perspective divide.
    pub fov: f32,
    /// Initial distance scale.
    pub scale: f32,
    /// Depth offset added after scaling.
    pub z_offset: f32,
    pub clear_color: Color,
    /// Lower bound for zooming.
    pub min_scale: f32,
    /// Upper bound for zooming.
    pub max_scale: f32,
    /// Autoplay spin per frame around X, Y and Z, in radians.
    pub spin_speed: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        let projection = Projection::default();
        Self {
            width: 800,
            height: 600,
            fov: projection.fov,
            scale: projection.scale,
            z_offset: projection.z_offset,
            clear_color: colors::BACKGROUND,
            min_scale: 1.0,
            max_scale: 500.0,
            spin_speed: [0.01, 0.007, 0.013],
        }
    }
}

impl RenderConfig {
    /// Parse and validate a RON document.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_ron_str(&std::fs::read_to_string(path)?)?;
        log::info!(
            "Loaded config from {:?}: {}x{}, fov {}, scale {}, z offset {}",
            path,
            config.width,
            config.height,
            config.fov,
            config.scale,
            config.z_offset
        );
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Projection tunables this config starts with.
    pub fn projection(&self) -> Projection {
        Projection::new(self.fov, self.scale, self.z_offset)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, value) in [
            ("fov", self.fov),
            ("scale", self.scale),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if !self.z_offset.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "z_offset must be finite, got {}",
                self.z_offset
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }
}
