//! RGBA colors with byte channels.
//!
//! Vertex colors are interpolated linearly during clipping and
//! rasterization; interpolation happens in `f64` and rounds back to bytes.

/// An RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Default wireframe color, an earthy brown.
    pub const BROWN: Self = Self::rgb(150, 75, 0);

    /// Framebuffer background.
    pub const BACKGROUND: Self = Self::BLACK;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color (alpha 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Linear interpolation between two colors; `t` = 0 gives `self`,
    /// `t` = 1 gives `other`.
    pub fn lerp(&self, other: Self, t: f64) -> Self {
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            channel(self.a, other.a),
        )
    }

    /// Barycentric blend of three colors with weights summing to 1.
    pub fn blend3(c1: Self, c2: Self, c3: Self, alpha: f64, beta: f64, gamma: f64) -> Self {
        let channel = |a: u8, b: u8, c: u8| {
            (alpha * a as f64 + beta * b as f64 + gamma * c as f64)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(
            channel(c1.r, c2.r, c3.r),
            channel(c1.g, c2.g, c3.g),
            channel(c1.b, c2.b, c3.b),
            channel(c1.a, c2.a, c3.a),
        )
    }
}
