//! Frustum clipping via generic 2D convex polygon intersection.
//!
//! Instead of a dedicated 3D clipper, a triangle is clipped against the
//! frustum in two passes, each working in a coordinate-plane projection
//! (one axis dropped):
//!
//! 1. the xz-plane pass clips against the left/right/near/far trapezoid,
//! 2. the yz-plane pass clips the result against the bottom/top/near/far
//!    trapezoid.
//!
//! Each pass computes the exact intersection of the projected triangle with
//! the convex clip polygon: triangle vertices inside the polygon, polygon
//! vertices inside the triangle (with barycentric depth/color
//! interpolation), and every edge-edge intersection point. The combined
//! vertex set is deduplicated and fan-triangulated back into triangles.
//!
//! Numerical degeneracies (collinear polygons, parallel segments,
//! zero-area configurations) are absorbed silently: they simply contribute
//! no vertices, and fewer than three surviving vertices yields no
//! triangles.

use std::cmp::Ordering;

use approx::abs_diff_eq;

use crate::camera::Camera;
use crate::color::Color;
use crate::math::{Vec2, Vec3};
use crate::triangle::{Triangle, Vertex};

/// Shared absolute tolerance for geometric comparisons.
///
/// A single constant is used for equality, degeneracy detection and the
/// rasterizer's depth comparison alike. This is adequate for scene
/// coordinates of moderate magnitude; scenes spanning extreme scales would
/// need per-purpose tolerances.
pub const EPS: f64 = 1e-9;

/// Sign of `x` with a dead zone of [`EPS`] around zero.
fn sign(x: f64) -> i32 {
    if x.abs() < EPS {
        0
    } else if x < 0.0 {
        -1
    } else {
        1
    }
}

/// True if the polygon has at least one non-collinear vertex triple.
///
/// A polygon failing this test has no interior, so no containment test
/// against it can ever select a point.
fn has_noncollinear_triple(polygon: &[Vec2]) -> bool {
    (1..polygon.len().saturating_sub(1)).any(|i| {
        let cross = (polygon[i] - polygon[0]).cross(polygon[i + 1] - polygon[0]);
        cross.abs() > EPS
    })
}

/// Indices of `points` lying inside (or on the boundary of) the convex
/// polygon `convex`.
///
/// A point is inside iff, for every polygon edge, the cross product of the
/// edge direction with the vector to the point has the same sign as the
/// cross product with a fixed interior reference (the vertex after next).
/// Boundary points produce a zero sign and still count as inside.
fn select_points_in_polygon(points: &[Vec2], convex: &[Vec2]) -> Vec<usize> {
    if !has_noncollinear_triple(convex) {
        return Vec::new();
    }

    let m = convex.len();
    (0..points.len())
        .filter(|&i| {
            (0..m).all(|j| {
                let edge = convex[(j + 1) % m] - convex[j];
                let interior = convex[(j + 2) % m] - convex[j];
                let to_point = points[i] - convex[j];
                (sign(edge.cross(interior)) - sign(edge.cross(to_point))).abs() != 2
            })
        })
        .collect()
}

/// Intersection of segment `v1..v2` with segment `u1..u2`.
///
/// Solves for the parametric point on `u` via perpendicular projection onto
/// the normal of `v`; a near-zero denominator means the segments are
/// parallel. The parameter must lie within `u` (epsilon-tolerant); the
/// caller separately verifies the point lies strictly inside `v`.
fn intersect_segments(v1: Vec2, v2: Vec2, u1: Vec2, u2: Vec2) -> Option<Vec2> {
    let v = v2 - v1;
    let u = u2 - u1;
    let normal = v.perp();

    let denominator = u.dot(normal);
    if denominator.abs() < EPS {
        return None;
    }

    let t = (v1.dot(normal) - u1.dot(normal)) / denominator;
    if -EPS < t && t < 1.0 + EPS {
        Some(u1 + u * t)
    } else {
        None
    }
}

/// True if `p` lies strictly between `v1` and `v2` on their common line.
fn is_strictly_on_segment(p: Vec2, v1: Vec2, v2: Vec2) -> bool {
    (p - v1).dot(p - v2) < 0.0
}

/// Doubled area of the 2D triangle `(a, b, c)`.
fn doubled_area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b - a).cross(c - a).abs()
}

/// Clips `triangle` against a convex polygon given in the xy-projection and
/// returns the covering triangles of the intersection.
///
/// Depth (z) and color are interpolated for every vertex the intersection
/// introduces: barycentrically for polygon vertices inside the triangle,
/// and by distance ratio along the edge for edge-edge intersections.
pub fn clip_triangle(triangle: &Triangle, clip_polygon: &[Vec2]) -> Vec<Triangle> {
    let points = [triangle.point(0), triangle.point(1), triangle.point(2)];
    let triangle_2d = [
        Vec2::new(points[0].x, points[0].y),
        Vec2::new(points[1].x, points[1].y),
        Vec2::new(points[2].x, points[2].y),
    ];

    let triangle_selected = select_points_in_polygon(&triangle_2d, clip_polygon);
    let polygon_selected = select_points_in_polygon(clip_polygon, &triangle_2d);

    let mut vertices: Vec<Vertex> = Vec::new();

    for i in triangle_selected {
        vertices.push(triangle.vertex(i));
    }

    for j in polygon_selected {
        let u = clip_polygon[j];
        let a = doubled_area(u, triangle_2d[1], triangle_2d[2]);
        let b = doubled_area(u, triangle_2d[0], triangle_2d[2]);
        let c = doubled_area(u, triangle_2d[0], triangle_2d[1]);
        let total = a + b + c;

        let alpha = a / total;
        let beta = b / total;
        let gamma = c / total;

        let z = alpha * points[0].z + beta * points[1].z + gamma * points[2].z;
        let color = Color::blend3(
            triangle.color(0),
            triangle.color(1),
            triangle.color(2),
            alpha,
            beta,
            gamma,
        );
        vertices.push(Vertex::new(Vec3::new(u.x, u.y, z), color));
    }

    collect_edge_intersections(triangle, &triangle_2d, clip_polygon, &mut vertices);

    remove_equal_vertices(&mut vertices);

    triangulate(vertices)
}

/// Appends every triangle-edge x polygon-edge intersection to `vertices`,
/// interpolating depth and color along the triangle edge by the normalized
/// distance to the intersection point.
fn collect_edge_intersections(
    triangle: &Triangle,
    triangle_2d: &[Vec2; 3],
    clip_polygon: &[Vec2],
    vertices: &mut Vec<Vertex>,
) {
    let m = clip_polygon.len();
    for i in 0..3 {
        let next = (i + 1) % 3;
        let v1 = triangle_2d[i];
        let v2 = triangle_2d[next];

        for j in 0..m {
            let u1 = clip_polygon[j];
            let u2 = clip_polygon[(j + 1) % m];

            let Some(p) = intersect_segments(v1, v2, u1, u2) else {
                continue;
            };
            if !is_strictly_on_segment(p, v1, v2) {
                continue;
            }

            let edge_length = (v2 - v1).magnitude();
            let alpha = (p - v2).magnitude() / edge_length;
            let beta = (p - v1).magnitude() / edge_length;

            let z = alpha * triangle.point(i).z + beta * triangle.point(next).z;
            let color = triangle.color(i).lerp(triangle.color(next), beta);
            vertices.push(Vertex::new(Vec3::new(p.x, p.y, z), color));
        }
    }
}

/// Drops vertices whose 3D points coincide within [`EPS`], keeping the
/// first occurrence.
fn remove_equal_vertices(vertices: &mut Vec<Vertex>) {
    let mut unique: Vec<Vertex> = Vec::new();
    for vertex in vertices.drain(..) {
        let duplicate = unique
            .iter()
            .any(|kept| abs_diff_eq!(kept.point, vertex.point, epsilon = EPS));
        if !duplicate {
            unique.push(vertex);
        }
    }
    *vertices = unique;
}

/// Picks the first coordinate-pair projection in which some consecutive
/// vertex triple is non-collinear.
///
/// The exhaustive trial over all three axis pairs is what makes the fan
/// triangulation work for clip polygons of arbitrary orientation; the
/// first pair can be degenerate when the polygon happens to project onto a
/// line in it.
fn determine_triangulation_axes(vertices: &[Vertex]) -> Option<(usize, usize)> {
    let n = vertices.len();
    for x_axis in 0..3 {
        for y_axis in (x_axis + 1)..3 {
            for k in 1..n.saturating_sub(1) {
                let v = vertices[0].point - vertices[k].point;
                let u = vertices[0].point - vertices[k + 1].point;
                let cross = v.project(x_axis, y_axis).cross(u.project(x_axis, y_axis));
                if cross.abs() > EPS {
                    return Some((x_axis, y_axis));
                }
            }
        }
    }
    None
}

/// Fan-triangulates a convex vertex set.
///
/// The vertex lexicographically smallest in the chosen 2D projection acts
/// as the sweep origin: the remaining vertices are sorted by signed angle
/// around it, the origin is appended last, and consecutive pairs of the
/// resulting cyclic order are emitted as a fan from the first sorted
/// vertex. A set with fewer than three vertices, or one that is collinear
/// in every projection, yields no triangles.
fn triangulate(vertices: Vec<Vertex>) -> Vec<Triangle> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    let Some((x_axis, y_axis)) = determine_triangulation_axes(&vertices) else {
        return Vec::new();
    };

    let mut start = vertices[0];
    for vertex in &vertices {
        let p = vertex.point;
        let s = start.point;
        if p.component(x_axis) < s.component(x_axis)
            || (p.component(x_axis) == s.component(x_axis)
                && p.component(y_axis) < s.component(y_axis))
        {
            start = *vertex;
        }
    }

    let start_2d = start.point.project(x_axis, y_axis);
    let mut ordered: Vec<Vertex> = vertices
        .into_iter()
        .filter(|vertex| !abs_diff_eq!(vertex.point, start.point, epsilon = EPS))
        .collect();

    ordered.sort_by(|a, b| {
        let a_2d = a.point.project(x_axis, y_axis) - start_2d;
        let b_2d = b.point.project(x_axis, y_axis) - start_2d;
        // Counter-clockwise of the other vertex sorts first.
        0.0f64
            .partial_cmp(&a_2d.cross(b_2d))
            .unwrap_or(Ordering::Equal)
    });
    ordered.push(start);

    (1..ordered.len() - 1)
        .map(|i| Triangle::from_vertices(ordered[0], ordered[i], ordered[i + 1]))
        .collect()
}

/// The side/near/far frustum trapezoid in a projected plane: the near edge
/// spans the bounds at distance n, the far edge the bounds scaled by f/n.
fn frustum_polygon(low: f64, high: f64, near: f64, far: f64) -> [Vec2; 4] {
    let k = far / near;
    [
        Vec2::new(low, -near),
        Vec2::new(high, -near),
        Vec2::new(high * k, -far),
        Vec2::new(low * k, -far),
    ]
}

fn permuted(triangle: &Triangle, permute: impl Fn(Vec3) -> Vec3) -> Triangle {
    Triangle::new(
        permute(triangle.point(0)),
        triangle.color(0),
        permute(triangle.point(1)),
        triangle.color(1),
        permute(triangle.point(2)),
        triangle.color(2),
    )
}

/// Clips a view-space triangle against the left/right/near/far bounds.
///
/// The clip runs in the xz-plane: y and z are swapped so that the engine's
/// xy-projection sees the xz coordinates, and swapped back afterwards.
pub fn frustum_clip_xz(camera: &Camera, triangle: &Triangle) -> Vec<Triangle> {
    debug_assert!(camera.near() != 0.0, "near plane distance must not be zero");

    let polygon = frustum_polygon(camera.left(), camera.right(), camera.near(), camera.far());
    let swap_yz = |p: Vec3| Vec3::new(p.x, p.z, p.y);

    clip_triangle(&permuted(triangle, swap_yz), &polygon)
        .iter()
        .map(|clipped| permuted(clipped, swap_yz))
        .collect()
}

/// Clips a view-space triangle against the bottom/top/near/far bounds.
///
/// The clip runs in the yz-plane via the cyclic permutation (y, z, x),
/// undone with the inverse permutation afterwards.
pub fn frustum_clip_yz(camera: &Camera, triangle: &Triangle) -> Vec<Triangle> {
    debug_assert!(camera.near() != 0.0, "near plane distance must not be zero");

    let polygon = frustum_polygon(camera.bottom(), camera.top(), camera.near(), camera.far());
    let rotate_forward = |p: Vec3| Vec3::new(p.y, p.z, p.x);
    let rotate_backward = |p: Vec3| Vec3::new(p.z, p.x, p.y);

    clip_triangle(&permuted(triangle, rotate_forward), &polygon)
        .iter()
        .map(|clipped| permuted(clipped, rotate_backward))
        .collect()
}
