use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trirast::bench::{clip_triangle, fill_triangle};
use trirast::prelude::*;

const BUFFER_WIDTH: usize = 800;
const BUFFER_HEIGHT: usize = 600;

fn small_triangle() -> Triangle {
    Triangle::new(
        Vec3::new(-0.05, -0.05, 0.0),
        Color::RED,
        Vec3::new(0.05, -0.05, 0.0),
        Color::GREEN,
        Vec3::new(0.0, 0.05, 0.0),
        Color::BLUE,
    )
}

fn medium_triangle() -> Triangle {
    Triangle::new(
        Vec3::new(-0.4, -0.4, 0.0),
        Color::RED,
        Vec3::new(0.4, -0.4, 0.0),
        Color::GREEN,
        Vec3::new(0.0, 0.4, 0.0),
        Color::BLUE,
    )
}

fn large_triangle() -> Triangle {
    Triangle::new(
        Vec3::new(-0.9, -0.9, 0.0),
        Color::RED,
        Vec3::new(0.9, -0.8, 0.0),
        Color::GREEN,
        Vec3::new(0.0, 0.9, 0.0),
        Color::BLUE,
    )
}

/// A unit cube centered at `center`, one color per face pair of triangles.
fn cube(center: Vec3) -> Vec<Triangle> {
    let colors = [
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::WHITE,
        Color::rgb(255, 255, 0),
        Color::rgb(0, 255, 255),
    ];
    // Corner pairs spanning each face, as (origin, edge_u, edge_v).
    let faces = [
        (Vec3::new(-0.5, -0.5, 0.5), Vec3::RIGHT, Vec3::UP),
        (Vec3::new(0.5, -0.5, -0.5), -Vec3::RIGHT, Vec3::UP),
        (Vec3::new(0.5, -0.5, 0.5), Vec3::FORWARD, Vec3::UP),
        (Vec3::new(-0.5, -0.5, -0.5), -Vec3::FORWARD, Vec3::UP),
        (Vec3::new(-0.5, 0.5, 0.5), Vec3::RIGHT, Vec3::FORWARD),
        (Vec3::new(-0.5, -0.5, -0.5), Vec3::RIGHT, -Vec3::FORWARD),
    ];

    faces
        .iter()
        .zip(colors)
        .flat_map(|(&(origin, u, v), color)| {
            let a = center + origin;
            let b = a + u;
            let c = b + v;
            let d = a + v;
            [
                Triangle::new(a, color, b, color, c, color),
                Triangle::new(a, color, c, color, d, color),
            ]
        })
        .collect()
}

fn benchmark_fill_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_triangle");

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("fill", name), &triangle, |b, tri| {
            let mut fb = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                fb.clear();
                fill_triangle(black_box(tri), &mut fb, None);
            });
        });

        group.bench_with_input(BenchmarkId::new("wireframe", name), &triangle, |b, tri| {
            let mut fb = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                fb.clear();
                fill_triangle(black_box(tri), &mut fb, Some(Color::BROWN));
            });
        });
    }

    group.finish();
}

fn benchmark_clip_triangle(c: &mut Criterion) {
    let square = vec![
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ];

    let mut group = c.benchmark_group("clip_triangle");

    // Fully inside: the cheap path.
    let inside = Triangle::from_coords(-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0);
    group.bench_function("inside", |b| {
        b.iter(|| clip_triangle(black_box(&inside), black_box(&square)))
    });

    // Straddling: intersections plus re-triangulation.
    let straddling = Triangle::from_coords(0.0, -0.5, 0.0, 2.0, 0.0, 1.0, 0.0, 0.5, 0.0);
    group.bench_function("straddling", |b| {
        b.iter(|| clip_triangle(black_box(&straddling), black_box(&square)))
    });

    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut world = World::new();
    for x in -2..=2 {
        for y in -2..=2 {
            world.add_triangles(cube(Vec3::new(x as f64 * 2.0, y as f64 * 2.0, -8.0)));
        }
    }

    let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    camera.set_frustum(-1.0, 1.0, -0.75, 0.75, 1.0, 20.0);

    let renderer = Renderer::new();

    c.bench_function("render_25_cubes", |b| {
        let mut fb = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| renderer.render(black_box(&world), &camera, &mut fb));
    });
}

criterion_group!(
    benches,
    benchmark_fill_triangle,
    benchmark_clip_triangle,
    benchmark_full_pipeline
);
criterion_main!(benches);
