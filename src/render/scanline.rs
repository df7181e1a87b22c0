//! Scanline triangle rasterization with depth-tested interior fill.
//!
//! A triangle arrives in normalized device coordinates. Its vertices are
//! mapped to clamped pixel coordinates, then the three edges are traced one
//! pixel at a time, stepping along the axis of greater extent (x and y swap
//! roles for edges steeper than 45 degrees). Each traced pixel records the
//! row's leftmost and rightmost boundary sample -- position, depth and
//! color -- in an edge table that lives only for the duration of one
//! triangle. The interior pass then draws a horizontal span per row between
//! the two boundary samples, interpolating depth and color, writing only
//! pixels that pass the depth test and are not blocked by wireframe
//! overdraw protection.

use crate::clip::EPS;
use crate::color::Color;
use crate::math::Vec3;
use crate::render::framebuffer::Framebuffer;
use crate::triangle::Triangle;

/// A traced edge endpoint in pixel coordinates, carrying NDC depth.
#[derive(Clone, Copy)]
struct EdgePoint {
    x: i32,
    y: i32,
    z: f64,
    color: Color,
}

/// Per-row boundary samples for one triangle.
///
/// Scratch state scoped to a single `fill_triangle` call; it is never
/// shared across triangles, which keeps rasterization reentrant.
struct EdgeTable {
    min_x: Vec<i32>,
    max_x: Vec<i32>,
    min_depth: Vec<f64>,
    max_depth: Vec<f64>,
    min_color: Vec<Color>,
    max_color: Vec<Color>,
    min_y: i32,
    max_y: i32,
}

impl EdgeTable {
    fn new(width: i32, height: i32) -> Self {
        let rows = height as usize;
        Self {
            // Sentinels one past the pixel range, so the first traced pixel
            // of a row always installs both boundary samples.
            min_x: vec![width; rows],
            max_x: vec![-1; rows],
            min_depth: vec![0.0; rows],
            max_depth: vec![0.0; rows],
            min_color: vec![Color::BLACK; rows],
            max_color: vec![Color::BLACK; rows],
            min_y: height - 1,
            max_y: 0,
        }
    }

    fn record(&mut self, x: i32, y: i32, z: f64, color: Color) {
        let row = y as usize;
        if x < self.min_x[row] {
            self.min_x[row] = x;
            self.min_depth[row] = z;
            self.min_color[row] = color;
        }
        if x > self.max_x[row] {
            self.max_x[row] = x;
            self.max_depth[row] = z;
            self.max_color[row] = color;
        }
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

/// True if an NDC depth lies within the visible cube's z range.
fn in_depth_range(z: f64) -> bool {
    -1.0 - EPS < z && z < 1.0 + EPS
}

/// Maps an NDC point to clamped pixel coordinates, keeping depth as is.
fn screen_point(p: Vec3, color: Color, width: i32, height: i32) -> EdgePoint {
    let x = ((p.x + 1.0) / 2.0 * width as f64) as i32;
    let y = ((1.0 - (p.y + 1.0) / 2.0) * height as f64) as i32;
    EdgePoint {
        x: x.clamp(0, width - 1),
        y: y.clamp(0, height - 1),
        z: p.z,
        color,
    }
}

/// Rasterizes one NDC triangle into the framebuffer.
///
/// With `wireframe` set, edge pixels within the visible depth range are
/// written directly in the given color and blocked against interior
/// overdraw.
pub fn fill_triangle(triangle: &Triangle, fb: &mut Framebuffer, wireframe: Option<Color>) {
    let width = fb.width() as i32;
    let height = fb.height() as i32;

    let a = screen_point(triangle.point(0), triangle.color(0), width, height);
    let b = screen_point(triangle.point(1), triangle.color(1), width, height);
    let c = screen_point(triangle.point(2), triangle.color(2), width, height);

    let mut table = EdgeTable::new(width, height);
    trace_edge(a, b, fb, &mut table, wireframe);
    trace_edge(a, c, fb, &mut table, wireframe);
    trace_edge(b, c, fb, &mut table, wireframe);

    fill_interior(&table, fb);
}

/// Steps along an edge one pixel at a time, recording row boundaries.
///
/// The walk always advances along x; for steep edges (or vertical ones)
/// the x and y roles are swapped first and swapped back per pixel. Depth
/// and color interpolate linearly with the step fraction.
fn trace_edge(
    start: EdgePoint,
    end: EdgePoint,
    fb: &mut Framebuffer,
    table: &mut EdgeTable,
    wireframe: Option<Color>,
) {
    let mut p1 = start;
    let mut p2 = end;

    let mut dx = p2.x - p1.x;
    let mut dy = p2.y - p1.y;

    let steep = dx == 0 || (dy as f64 / dx as f64).abs() > 1.0;
    if steep {
        std::mem::swap(&mut p1.x, &mut p1.y);
        std::mem::swap(&mut p2.x, &mut p2.y);
        std::mem::swap(&mut dx, &mut dy);
    }
    if p1.x > p2.x {
        std::mem::swap(&mut p1, &mut p2);
        dx = -dx;
        dy = -dy;
    }
    let dz = p2.z - p1.z;

    for i in p1.x..=p2.x {
        let alpha = if i == p1.x {
            0.0
        } else {
            (i - p1.x) as f64 / dx as f64
        };

        let mut x = i;
        let mut y = (p1.y as f64 + alpha * dy as f64).round() as i32;
        if steep {
            std::mem::swap(&mut x, &mut y);
        }

        let z = p1.z + alpha * dz;
        let color = p1.color.lerp(p2.color, alpha);

        table.record(x, y, z, color);

        if let Some(wire_color) = wireframe {
            if in_depth_range(z) {
                fb.set_pixel(x as usize, y as usize, z, wire_color);
                fb.block_pixel(x as usize, y as usize);
            }
        }
    }
}

/// Fills horizontal spans between the per-row boundary samples.
///
/// A pixel is written only if it is not blocked, its depth lies within the
/// visible range, and it is at least as near as the depth already recorded
/// there (epsilon-tolerant, so nearer-or-equal wins).
fn fill_interior(table: &EdgeTable, fb: &mut Framebuffer) {
    for y in table.min_y..=table.max_y {
        let row = y as usize;
        let x1 = table.min_x[row];
        let x2 = table.max_x[row];
        if x1 > x2 {
            continue;
        }

        let z1 = table.min_depth[row];
        let z2 = table.max_depth[row];
        let c1 = table.min_color[row];
        let c2 = table.max_color[row];
        let dx = x2 - x1;

        for x in x1..=x2 {
            let alpha = if x == x1 {
                0.0
            } else {
                (x - x1) as f64 / dx as f64
            };
            let z = z1 + alpha * (z2 - z1);

            let (ux, uy) = (x as usize, row);
            if fb.is_blocked(ux, uy) {
                continue;
            }
            if -1.0 - EPS < z && z < fb.depth(ux, uy) + EPS {
                fb.set_pixel(ux, uy, z, c1.lerp(c2, alpha));
            }
        }
    }
}
