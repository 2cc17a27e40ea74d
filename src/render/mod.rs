//! Frame buffer and rasterization.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::{FrameBuffer, FAR_DEPTH};
pub use rasterizer::{
    Barycentric, EdgeFunctionRasterizer, FlatShader, PixelRect, PixelShader,
    TextureModulateShader, Triangle,
};
