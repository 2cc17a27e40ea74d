//! A CPU software rasterizer for one spinning, lit, optionally textured mesh.
//!
//! Every frame runs the same fixed pipeline on the CPU: transform the mesh,
//! compute smooth vertex normals and light, project with a pinhole divide,
//! then fill triangles with barycentric weights and a depth buffer. The
//! result is an RGBA byte buffer that can be shown in a window (feature
//! `window`) or written to PNG files.
//!
//! # Quick Start
//!
//! ```ignore
//! use spinraster::prelude::*;
//!
//! let config = RenderConfig::default();
//! let mut engine = Engine::new(&config);
//! let mut controller = SpinController::new(&config);
//! let mesh = Mesh::cube();
//!
//! let input = controller.advance();
//! engine.render(&mesh, None, &input);
//! let rgba = engine.framebuffer().color_bytes();
//! ```

pub mod capture;
pub mod colors;
pub mod config;
pub mod control;
pub mod engine;
pub mod frame;
pub mod light;
pub mod math;
pub mod mesh;
pub mod prepare;
pub mod projection;
pub mod render;
pub mod texture;
#[cfg(feature = "window")]
pub mod window;

pub use capture::{CaptureError, FrameRecorder};
pub use colors::Color;
pub use config::{ConfigError, RenderConfig};
pub use control::{SpinController, SpinRecording};
pub use engine::{Engine, FrameStats};
pub use frame::FrameInput;
pub use mesh::{Face, LoadError, Mesh, MeshError};
pub use projection::Projection;
pub use texture::{Texture, TextureError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::capture::FrameRecorder;
    pub use crate::colors::{self, Color};
    pub use crate::config::RenderConfig;
    pub use crate::control::{SpinController, SpinRecording};
    pub use crate::engine::{Engine, FrameStats};
    pub use crate::frame::FrameInput;
    pub use crate::light::DirectionalLight;
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::mesh::{Face, Mesh};
    pub use crate::projection::Projection;
    pub use crate::render::FrameBuffer;
    pub use crate::texture::Texture;

    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{EdgeFunctionRasterizer, FlatShader, FrameBuffer, Triangle};
}
