//! A CPU-based software triangle rasterizer.
//!
//! Triangles in world space are transformed through a free-flying camera,
//! clipped exactly against the view frustum via 2D convex polygon
//! intersection, projected to normalized device coordinates and scanline
//! rasterized into a framebuffer with a depth buffer and per-vertex color
//! interpolation. No GPU and no windowing: the framebuffer is plain memory
//! the caller can present however it likes.
//!
//! # Quick Start
//!
//! ```
//! use trirast::prelude::*;
//!
//! let mut world = World::new();
//! world.add_triangle(Triangle::new(
//!     Vec3::new(-1.0, -1.0, -5.0),
//!     Color::RED,
//!     Vec3::new(1.0, -1.0, -5.0),
//!     Color::GREEN,
//!     Vec3::new(0.0, 1.0, -5.0),
//!     Color::BLUE,
//! ));
//!
//! let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
//! let mut fb = Framebuffer::new(640, 480);
//! Renderer::new().render(&world, &camera, &mut fb);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod clip;
pub mod color;
pub mod math;
pub mod render;
pub mod triangle;
pub mod world;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use color::Color;
pub use render::{Framebuffer, Renderer};
pub use triangle::{Triangle, Vertex};
pub use world::World;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use trirast::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::triangle::{Triangle, Vertex};
    pub use crate::world::World;

    // Camera
    pub use crate::camera::Camera;

    // Math
    pub use crate::math::{Mat4, Vec2, Vec3, Vec4};

    // Rendering
    pub use crate::color::Color;
    pub use crate::render::{Framebuffer, Renderer, MAX_DEPTH};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clip::clip_triangle;
    pub use crate::render::scanline::fill_triangle;
}
