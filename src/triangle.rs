//! Colored triangles in homogeneous coordinates.
//!
//! Points are stored as `Vec4` with w = 1 so that both the view and the
//! projection transform are plain matrix multiplications. Cartesian reads
//! de-homogenize on the way out.

use crate::color::Color;
use crate::math::{Mat4, Vec3, Vec4};

/// A 3D point paired with its color.
///
/// The atomic unit produced and consumed by the clipping engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub point: Vec3,
    pub color: Color,
}

impl Vertex {
    pub const fn new(point: Vec3, color: Color) -> Self {
        Self { point, color }
    }
}

/// A triangle of three colored vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    hpoints: [Vec4; 3],
    colors: [Color; 3],
}

impl Triangle {
    pub fn new(p1: Vec3, c1: Color, p2: Vec3, c2: Color, p3: Vec3, c3: Color) -> Self {
        Self {
            hpoints: [Vec4::from_point(p1), Vec4::from_point(p2), Vec4::from_point(p3)],
            colors: [c1, c2, c3],
        }
    }

    pub fn from_vertices(v1: Vertex, v2: Vertex, v3: Vertex) -> Self {
        Self::new(v1.point, v1.color, v2.point, v2.color, v3.point, v3.color)
    }

    /// An uncolored (white) triangle from raw coordinates.
    #[allow(clippy::too_many_arguments)]
    pub fn from_coords(
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
        x3: f64,
        y3: f64,
        z3: f64,
    ) -> Self {
        Self::new(
            Vec3::new(x1, y1, z1),
            Color::WHITE,
            Vec3::new(x2, y2, z2),
            Color::WHITE,
            Vec3::new(x3, y3, z3),
            Color::WHITE,
        )
    }

    pub fn set_colors(&mut self, c1: Color, c2: Color, c3: Color) {
        self.colors = [c1, c2, c3];
    }

    /// Cartesian position of vertex `i` (0, 1 or 2).
    ///
    /// # Panics
    /// Panics if the stored homogeneous weight is zero.
    pub fn point(&self, i: usize) -> Vec3 {
        self.hpoints[i].cartesian()
    }

    pub fn color(&self, i: usize) -> Color {
        self.colors[i]
    }

    pub fn vertex(&self, i: usize) -> Vertex {
        Vertex::new(self.point(i), self.color(i))
    }

    /// Returns this triangle with all three points transformed by `matrix`.
    ///
    /// Colors are carried through untouched. The value-returning form keeps
    /// the homogeneous storage private; the renderer never mutates a world
    /// triangle in place.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            hpoints: [
                *matrix * self.hpoints[0],
                *matrix * self.hpoints[1],
                *matrix * self.hpoints[2],
            ],
            colors: self.colors,
        }
    }
}
