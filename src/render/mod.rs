//! Rasterization: framebuffer, scanline fill and the per-frame pipeline.

mod framebuffer;
mod renderer;
pub(crate) mod scanline;

pub use framebuffer::{Framebuffer, MAX_DEPTH};
pub use renderer::Renderer;
