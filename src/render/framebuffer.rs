//! Frame buffer with color, depth and blocked-pixel storage.
//!
//! Three parallel per-pixel arrays back a render target: a color buffer, a
//! depth buffer holding NDC z values (smaller = nearer, initialized to
//! [`MAX_DEPTH`]), and a blocked mask protecting wireframe pixels from
//! being overdrawn by interior fills.
//!
//! Out-of-bounds access is a caller bug and fails fast; the rasterizer
//! clamps screen coordinates before ever touching the buffer.

use crate::color::Color;

/// Farthest representable NDC depth; the depth buffer resets to this value.
pub const MAX_DEPTH: f64 = 1.0;

pub struct Framebuffer {
    width: usize,
    height: usize,
    depth: Vec<f64>,
    color: Vec<Color>,
    blocked: Vec<bool>,
}

impl Framebuffer {
    /// Creates a cleared framebuffer.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "framebuffer dimensions must be non-zero");
        let pixel_count = width * height;
        Self {
            width,
            height,
            depth: vec![MAX_DEPTH; pixel_count],
            color: vec![Color::BACKGROUND; pixel_count],
            blocked: vec![false; pixel_count],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resets depth to [`MAX_DEPTH`], color to the background and unblocks
    /// every pixel. Called once at the start of each render.
    pub fn clear(&mut self) {
        self.depth.fill(MAX_DEPTH);
        self.color.fill(Color::BACKGROUND);
        self.blocked.fill(false);
    }

    /// Writes color and depth at (x, y) unconditionally; depth testing is
    /// the rasterizer's responsibility.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, depth: f64, color: Color) {
        let index = self.index(x, y);
        self.depth[index] = depth;
        self.color[index] = color;
    }

    #[inline]
    pub fn depth(&self, x: usize, y: usize) -> f64 {
        self.depth[self.index(x, y)]
    }

    #[inline]
    pub fn color(&self, x: usize, y: usize) -> Color {
        self.color[self.index(x, y)]
    }

    #[inline]
    pub fn block_pixel(&mut self, x: usize, y: usize) {
        let index = self.index(x, y);
        self.blocked[index] = true;
    }

    #[inline]
    pub fn is_blocked(&self, x: usize, y: usize) -> bool {
        self.blocked[self.index(x, y)]
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} framebuffer",
            self.width,
            self.height
        );
        y * self.width + x
    }
}
