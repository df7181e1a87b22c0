//! Renders a camera orbit around a cube and a pyramid, writing one PNG per
//! frame (`frame_000.png` .. `frame_035.png`).

use image::RgbaImage;
use trirast::prelude::*;

const WIDTH: usize = 640;
const HEIGHT: usize = 480;
const FRAMES: usize = 36;

fn save_png(fb: &Framebuffer, path: &str) {
    let mut img = RgbaImage::new(fb.width() as u32, fb.height() as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = fb.color(x as usize, y as usize);
        *pixel = image::Rgba([color.r, color.g, color.b, color.a]);
    }
    img.save(path).expect("failed to write PNG");
}

/// Unit cube centered at `center`, one color per face.
fn cube(center: Vec3, world: &mut World) {
    let colors = [
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::rgb(255, 255, 0),
        Color::rgb(255, 0, 255),
        Color::rgb(0, 255, 255),
    ];
    let faces = [
        (Vec3::new(-0.5, -0.5, 0.5), Vec3::RIGHT, Vec3::UP),
        (Vec3::new(0.5, -0.5, -0.5), -Vec3::RIGHT, Vec3::UP),
        (Vec3::new(0.5, -0.5, 0.5), Vec3::FORWARD, Vec3::UP),
        (Vec3::new(-0.5, -0.5, -0.5), -Vec3::FORWARD, Vec3::UP),
        (Vec3::new(-0.5, 0.5, 0.5), Vec3::RIGHT, Vec3::FORWARD),
        (Vec3::new(-0.5, -0.5, -0.5), Vec3::RIGHT, -Vec3::FORWARD),
    ];

    for (&(origin, u, v), color) in faces.iter().zip(colors) {
        let a = center + origin;
        let b = a + u;
        let c = b + v;
        let d = a + v;
        world.add_triangle(Triangle::new(a, color, b, color, c, color));
        world.add_triangle(Triangle::new(a, color, c, color, d, color));
    }
}

/// Square-based pyramid with its apex straight above `center`.
fn pyramid(center: Vec3, world: &mut World) {
    let apex = center + Vec3::new(0.0, 0.8, 0.0);
    let base = [
        center + Vec3::new(-0.6, 0.0, 0.6),
        center + Vec3::new(0.6, 0.0, 0.6),
        center + Vec3::new(0.6, 0.0, -0.6),
        center + Vec3::new(-0.6, 0.0, -0.6),
    ];
    let side_colors = [Color::RED, Color::GREEN, Color::BLUE, Color::WHITE];

    for i in 0..4 {
        let color = side_colors[i];
        world.add_triangle(Triangle::new(
            base[i],
            color,
            base[(i + 1) % 4],
            color,
            apex,
            Color::rgb(255, 255, 0),
        ));
    }
    let floor = Color::rgb(120, 120, 120);
    world.add_triangle(Triangle::new(base[0], floor, base[1], floor, base[2], floor));
    world.add_triangle(Triangle::new(base[0], floor, base[2], floor, base[3], floor));
}

fn main() {
    let mut world = World::new();
    cube(Vec3::new(-1.2, 0.0, -6.0), &mut world);
    pyramid(Vec3::new(1.2, -0.5, -6.0), &mut world);

    let mut renderer = Renderer::new();
    let mut fb = Framebuffer::new(WIDTH, HEIGHT);

    let scene_center = Vec3::new(0.0, 0.0, -6.0);
    let radius = 5.0;

    for frame in 0..FRAMES {
        let angle = frame as f64 / FRAMES as f64 * std::f64::consts::TAU;

        // Orbit the scene center in the xz-plane, always looking at it.
        let position = scene_center + Vec3::new(angle.sin() * radius, 1.0, angle.cos() * radius);
        let mut camera = Camera::new(position, scene_center - position);
        camera.set_frustum(-1.0, 1.0, -0.75, 0.75, 1.0, 20.0);

        renderer.render(&world, &camera, &mut fb);
        save_png(&fb, &format!("frame_{frame:03}.png"));
    }

    println!("wrote {FRAMES} frames");
}
