//! The per-frame render pipeline.
//!
//! For every world triangle: transform into view space, clip against the
//! frustum in the xz- and yz-plane passes, project the surviving triangles
//! into normalized device coordinates and hand them to the scanline
//! rasterizer. The framebuffer is cleared once per frame; the depth buffer
//! resolves visibility between triangles, so submission order never
//! affects the image.

use crate::camera::Camera;
use crate::clip::{frustum_clip_xz, frustum_clip_yz};
use crate::color::Color;
use crate::render::framebuffer::Framebuffer;
use crate::render::scanline;
use crate::world::World;

/// Renders a [`World`] through a [`Camera`] into a [`Framebuffer`].
///
/// Holds only presentation settings; all per-frame state lives in the
/// framebuffer and in call-local scratch, so one renderer can serve any
/// number of targets.
#[derive(Clone, Debug)]
pub struct Renderer {
    wireframe_visible: bool,
    wireframe_color: Color,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            wireframe_visible: false,
            wireframe_color: Color::BROWN,
        }
    }

    /// Toggles drawing of triangle edges on top of the interior fill.
    pub fn set_wireframe_visible(&mut self, visible: bool) {
        self.wireframe_visible = visible;
    }

    pub fn set_wireframe_color(&mut self, color: Color) {
        self.wireframe_color = color;
    }

    /// Renders one frame.
    ///
    /// Clears the framebuffer, then runs every world triangle through the
    /// view transform, both frustum clipping passes and the projection
    /// transform before rasterizing.
    pub fn render(&self, world: &World, camera: &Camera, fb: &mut Framebuffer) {
        fb.clear();

        let view = camera.view_matrix();
        let projection = camera.projection_matrix();
        let wireframe = self.wireframe_visible.then_some(self.wireframe_color);

        for triangle in world {
            let viewed = triangle.transformed(&view);
            for clipped_xz in frustum_clip_xz(camera, &viewed) {
                for clipped in frustum_clip_yz(camera, &clipped_xz) {
                    let projected = clipped.transformed(&projection);
                    scanline::fill_triangle(&projected, fb, wireframe);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use crate::triangle::Triangle;
    use approx::assert_abs_diff_eq;

    fn test_camera() -> Camera {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        camera.set_frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 4.0);
        camera
    }

    /// A square at the near plane that exactly fills the viewport.
    fn near_plane_square(color: Color) -> World {
        World::from_triangles(vec![
            Triangle::new(
                Vec3::new(-1.0, -1.0, -2.0),
                color,
                Vec3::new(1.0, -1.0, -2.0),
                color,
                Vec3::new(-1.0, 1.0, -2.0),
                color,
            ),
            Triangle::new(
                Vec3::new(1.0, -1.0, -2.0),
                color,
                Vec3::new(1.0, 1.0, -2.0),
                color,
                Vec3::new(-1.0, 1.0, -2.0),
                color,
            ),
        ])
    }

    fn centered_triangle(color: Color, z: f64) -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, z),
            color,
            Vec3::new(1.0, -1.0, z),
            color,
            Vec3::new(0.0, 1.0, z),
            color,
        )
    }

    #[test]
    fn near_plane_square_fills_every_pixel() {
        let camera = test_camera();
        let world = near_plane_square(Color::RED);
        let mut fb = Framebuffer::new(16, 16);

        Renderer::new().render(&world, &camera, &mut fb);

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(fb.color(x, y), Color::RED, "pixel ({x}, {y})");
                assert_abs_diff_eq!(fb.depth(x, y), -1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn empty_world_leaves_framebuffer_cleared() {
        let camera = test_camera();
        let mut fb = Framebuffer::new(8, 8);
        fb.set_pixel(3, 3, 0.0, Color::GREEN);

        Renderer::new().render(&World::new(), &camera, &mut fb);
        assert_eq!(fb.color(3, 3), Color::BACKGROUND);
        assert_eq!(fb.depth(3, 3), crate::render::MAX_DEPTH);
    }

    #[test]
    fn triangle_behind_camera_is_not_drawn() {
        let camera = test_camera();
        let world = World::from_triangles(vec![centered_triangle(Color::RED, 3.0)]);
        let mut fb = Framebuffer::new(8, 8);

        Renderer::new().render(&world, &camera, &mut fb);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fb.color(x, y), Color::BACKGROUND);
            }
        }
    }

    #[test]
    fn nearer_triangle_occludes_regardless_of_submission_order() {
        let camera = test_camera();
        let near = centered_triangle(Color::RED, -2.5);
        let far = centered_triangle(Color::BLUE, -3.5);
        let renderer = Renderer::new();

        let mut near_first = Framebuffer::new(64, 64);
        renderer.render(
            &World::from_triangles(vec![near, far]),
            &camera,
            &mut near_first,
        );

        let mut far_first = Framebuffer::new(64, 64);
        renderer.render(
            &World::from_triangles(vec![far, near]),
            &camera,
            &mut far_first,
        );

        assert_eq!(near_first.color(32, 32), Color::RED);
        assert_eq!(far_first.color(32, 32), Color::RED);

        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(near_first.color(x, y), far_first.color(x, y));
                assert_eq!(near_first.depth(x, y), far_first.depth(x, y));
            }
        }
    }

    #[test]
    fn repeated_renders_are_identical() {
        let camera = test_camera();
        let world = World::from_triangles(vec![
            centered_triangle(Color::RED, -2.5),
            centered_triangle(Color::GREEN, -3.0),
        ]);
        let renderer = Renderer::new();

        let mut first = Framebuffer::new(32, 32);
        renderer.render(&world, &camera, &mut first);
        let mut second = Framebuffer::new(32, 32);
        renderer.render(&world, &camera, &mut second);

        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(first.color(x, y), second.color(x, y));
                assert_eq!(first.depth(x, y), second.depth(x, y));
            }
        }
    }

    #[test]
    fn wireframe_draws_edges_in_the_configured_color() {
        let camera = test_camera();
        let world = near_plane_square(Color::RED);
        let mut renderer = Renderer::new();
        renderer.set_wireframe_visible(true);

        let mut fb = Framebuffer::new(16, 16);
        renderer.render(&world, &camera, &mut fb);

        // The square's corner lies on two edges.
        assert_eq!(fb.color(0, 0), Color::BROWN);
        assert!(fb.is_blocked(0, 0));
        // Off-diagonal interior pixels keep the fill color.
        assert_eq!(fb.color(3, 8), Color::RED);
        assert!(!fb.is_blocked(3, 8));

        renderer.set_wireframe_color(Color::GREEN);
        renderer.render(&world, &camera, &mut fb);
        assert_eq!(fb.color(0, 0), Color::GREEN);
    }
}
