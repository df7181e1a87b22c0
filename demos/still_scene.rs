//! Renders a single frame with a wireframe overlay and writes it to
//! `still_scene.png`.

use image::RgbaImage;
use trirast::prelude::*;

const WIDTH: usize = 800;
const HEIGHT: usize = 600;

fn save_png(fb: &Framebuffer, path: &str) {
    let mut img = RgbaImage::new(fb.width() as u32, fb.height() as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = fb.color(x as usize, y as usize);
        *pixel = image::Rgba([color.r, color.g, color.b, color.a]);
    }
    img.save(path).expect("failed to write PNG");
}

fn main() {
    let mut world = World::new();

    // A floor quad and two overlapping triangles at different depths.
    let floor = Color::rgb(60, 60, 70);
    world.add_triangle(Triangle::new(
        Vec3::new(-4.0, -1.0, -2.0),
        floor,
        Vec3::new(4.0, -1.0, -2.0),
        floor,
        Vec3::new(4.0, -1.0, -10.0),
        floor,
    ));
    world.add_triangle(Triangle::new(
        Vec3::new(-4.0, -1.0, -2.0),
        floor,
        Vec3::new(4.0, -1.0, -10.0),
        floor,
        Vec3::new(-4.0, -1.0, -10.0),
        floor,
    ));

    world.add_triangle(Triangle::new(
        Vec3::new(-1.5, -1.0, -5.0),
        Color::RED,
        Vec3::new(0.5, -1.0, -5.0),
        Color::GREEN,
        Vec3::new(-0.5, 1.0, -5.0),
        Color::BLUE,
    ));
    world.add_triangle(Triangle::new(
        Vec3::new(-0.5, -1.0, -6.5),
        Color::WHITE,
        Vec3::new(1.5, -1.0, -6.5),
        Color::WHITE,
        Vec3::new(0.5, 1.5, -6.5),
        Color::WHITE,
    ));

    let mut camera = Camera::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, -0.1, -1.0));
    camera.set_frustum(-1.0, 1.0, -0.75, 0.75, 1.0, 20.0);

    let mut renderer = Renderer::new();
    renderer.set_wireframe_visible(true);

    let mut fb = Framebuffer::new(WIDTH, HEIGHT);
    renderer.render(&world, &camera, &mut fb);

    save_png(&fb, "still_scene.png");
    println!("wrote still_scene.png");
}
