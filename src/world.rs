//! The scene: an append-only, ordered collection of triangles.
//!
//! The renderer only ever iterates a world read-only; submission order does
//! not affect the final image because the depth buffer resolves overlap.

use crate::triangle::Triangle;

#[derive(Clone, Debug, Default)]
pub struct World {
    triangles: Vec<Triangle>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn add_triangles(&mut self, triangles: impl IntoIterator<Item = Triangle>) {
        self.triangles.extend(triangles);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::math::Vec3;

    fn tri(z: f64) -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, z),
            Color::WHITE,
            Vec3::new(1.0, 0.0, z),
            Color::WHITE,
            Vec3::new(0.0, 1.0, z),
            Color::WHITE,
        )
    }

    #[test]
    fn append_preserves_order() {
        let mut world = World::new();
        world.add_triangle(tri(1.0));
        world.add_triangles([tri(2.0), tri(3.0)]);

        let zs: Vec<f64> = world.iter().map(|t| t.point(0).z).collect();
        assert_eq!(zs, vec![1.0, 2.0, 3.0]);
        assert_eq!(world.len(), 3);
        assert!(!world.is_empty());
    }
}
