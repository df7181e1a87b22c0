//! Free-flying camera with an explicit orthonormal basis.
//!
//! The basis is derived from the viewing direction and a pivot hint:
//!
//! - `e1` (right)   = normalize(direction × pivot)
//! - `e2` (up)      = −normalize(direction × e1)
//! - `e3` (forward) = −normalize(direction)
//!
//! The view matrix is the transpose of `[e1 e2 e3]` composed with a
//! translation by −position; the projection matrix is the standard
//! perspective-frustum form built from the six bounds. Every mutator
//! recomputes the dependent matrix, so the getters are always consistent
//! with the latest state.

use crate::math::{Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    pivot: Vec3,

    e1: Vec3,
    e2: Vec3,
    e3: Vec3,

    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,

    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, -Vec3::FORWARD)
    }
}

impl Camera {
    /// Creates a camera at `position` looking along `direction`, with an
    /// up-axis pivot hint and a symmetric unit frustum.
    ///
    /// # Panics
    /// Panics if `direction` is parallel to the default pivot (0, 1, 0);
    /// use [`Camera::set_pivot`] with a different hint for such directions.
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        let mut camera = Self {
            position,
            direction,
            pivot: Vec3::UP,
            e1: Vec3::RIGHT,
            e2: Vec3::UP,
            e3: Vec3::FORWARD,
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: 1.0,
            far: 10.0,
            view_matrix: Mat4::identity(),
            projection_matrix: Mat4::identity(),
        };
        camera.rebuild_basis();
        camera.rebuild_projection_matrix();
        camera
    }

    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.position = Vec3::new(x, y, z);
        self.rebuild_view_matrix();
    }

    pub fn set_direction(&mut self, x: f64, y: f64, z: f64) {
        self.direction = Vec3::new(x, y, z);
        self.rebuild_basis();
    }

    /// Sets the pivot hint and re-derives the orthonormal basis.
    ///
    /// # Panics
    /// Panics if the pivot is parallel to the current direction; the right
    /// vector would be undefined.
    pub fn set_pivot(&mut self, x: f64, y: f64, z: f64) {
        self.pivot = Vec3::new(x, y, z);
        self.rebuild_basis();
    }

    /// Sets the six frustum bounds and rebuilds the projection matrix.
    ///
    /// # Panics
    /// Panics on degenerate bounds: `n` = 0, `f` = `n`, `r` = `l` or
    /// `t` = `b`.
    pub fn set_frustum(&mut self, l: f64, r: f64, b: f64, t: f64, n: f64, f: f64) {
        assert!(n != 0.0, "near plane distance must not be zero");
        assert!(f != n, "far plane must differ from near plane");
        assert!(r != l, "left and right bounds must differ");
        assert!(t != b, "bottom and top bounds must differ");

        self.left = l;
        self.right = r;
        self.bottom = b;
        self.top = t;
        self.near = n;
        self.far = f;
        self.rebuild_projection_matrix();
    }

    /// Rotates the viewing frame about an arbitrary axis (Rodrigues form).
    ///
    /// Direction, pivot and all three basis vectors rotate together, keeping
    /// the basis orthonormal.
    pub fn rotate(&mut self, axis: Vec3, angle: f64) {
        let m = Mat4::rotation_about_axis(axis, angle);
        self.direction = m * self.direction;
        self.pivot = m * self.pivot;
        self.e1 = m * self.e1;
        self.e2 = m * self.e2;
        self.e3 = m * self.e3;
        self.rebuild_view_matrix();
    }

    /// Rotation about the viewing direction.
    pub fn roll(&mut self, angle: f64) {
        self.rotate(self.direction, angle);
    }

    /// Rotation about the right vector.
    pub fn pitch(&mut self, angle: f64) {
        self.rotate(self.e1, angle);
    }

    /// Rotation about the up vector.
    pub fn yaw(&mut self, angle: f64) {
        self.rotate(self.e2, angle);
    }

    /// Translates the position without changing orientation.
    pub fn shift(&mut self, offset: Vec3) {
        self.position = self.position + offset;
        self.rebuild_view_matrix();
    }

    pub fn move_forward(&mut self, length: f64) {
        self.shift(self.direction.normalize() * length);
    }

    pub fn move_backward(&mut self, length: f64) {
        self.shift(-(self.direction.normalize() * length));
    }

    pub fn move_rightward(&mut self, length: f64) {
        self.shift(self.e1 * length);
    }

    pub fn move_leftward(&mut self, length: f64) {
        self.shift(-(self.e1 * length));
    }

    pub fn move_upward(&mut self, length: f64) {
        self.shift(self.e2 * length);
    }

    pub fn move_downward(&mut self, length: f64) {
        self.shift(-(self.e2 * length));
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    fn rebuild_basis(&mut self) {
        let right = self.direction.cross(self.pivot);
        assert!(
            right.magnitude() > f64::EPSILON,
            "camera direction must not be parallel to the pivot"
        );
        self.e1 = right.normalize();
        self.e2 = -self.direction.cross(self.e1).normalize();
        self.e3 = -self.direction.normalize();
        self.rebuild_view_matrix();
    }

    fn rebuild_view_matrix(&mut self) {
        let (e1, e2, e3) = (self.e1, self.e2, self.e3);
        let p = self.position;
        // Transpose of the basis composed with translation by -position.
        self.view_matrix = Mat4::new([
            [e1.x, e1.y, e1.z, -e1.dot(p)],
            [e2.x, e2.y, e2.z, -e2.dot(p)],
            [e3.x, e3.y, e3.z, -e3.dot(p)],
            [0.0, 0.0, 0.0, 1.0],
        ]);
    }

    fn rebuild_projection_matrix(&mut self) {
        let (l, r) = (self.left, self.right);
        let (b, t) = (self.bottom, self.top);
        let (n, f) = (self.near, self.far);

        self.projection_matrix = Mat4::new([
            [2.0 * n / (r - l), 0.0, (r + l) / (r - l), 0.0],
            [0.0, 2.0 * n / (t - b), (t + b) / (t - b), 0.0],
            [0.0, 0.0, -(f + n) / (f - n), -2.0 * n * f / (f - n)],
            [0.0, 0.0, -1.0, 0.0],
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::FRAC_PI_3;

    fn looking_down_negative_z() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn basis_is_orthonormal() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.3, -0.2, -1.0));
        camera.set_pivot(0.1, 1.0, 0.2);

        assert_relative_eq!(camera.e1.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(camera.e2.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(camera.e3.magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(camera.e1.dot(camera.e2), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(camera.e1.dot(camera.e3), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(camera.e2.dot(camera.e3), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn view_matrix_maps_camera_position_to_origin() {
        let mut camera = looking_down_negative_z();
        camera.set_position(2.0, -1.0, 5.0);

        let origin = camera.view_matrix() * crate::math::Vec4::point(2.0, -1.0, 5.0);
        assert_abs_diff_eq!(origin.cartesian(), Vec3::ZERO, epsilon = 1e-12);
    }

    #[test]
    fn looking_down_negative_z_gives_identity_rotation() {
        let camera = looking_down_negative_z();
        assert_abs_diff_eq!(camera.e1, Vec3::RIGHT, epsilon = 1e-12);
        assert_abs_diff_eq!(camera.e2, Vec3::UP, epsilon = 1e-12);
        assert_abs_diff_eq!(camera.e3, Vec3::FORWARD, epsilon = 1e-12);
    }

    #[test]
    fn yaw_round_trip_restores_view_matrix() {
        let mut camera = looking_down_negative_z();
        let before = camera.view_matrix();
        camera.yaw(FRAC_PI_3);
        camera.yaw(-FRAC_PI_3);
        assert_abs_diff_eq!(camera.view_matrix(), before, epsilon = 1e-12);
    }

    #[test]
    fn rotation_keeps_basis_orthonormal() {
        let mut camera = looking_down_negative_z();
        camera.roll(0.4);
        camera.pitch(-0.7);
        camera.yaw(1.1);

        assert_relative_eq!(camera.e1.magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(camera.e1.dot(camera.e2), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(camera.e2.dot(camera.e3), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn moves_translate_along_the_basis() {
        let mut camera = looking_down_negative_z();
        camera.move_forward(3.0);
        assert_abs_diff_eq!(camera.position(), Vec3::new(0.0, 0.0, -3.0), epsilon = 1e-12);
        camera.move_rightward(2.0);
        assert_abs_diff_eq!(camera.position(), Vec3::new(2.0, 0.0, -3.0), epsilon = 1e-12);
        camera.move_upward(1.0);
        assert_abs_diff_eq!(camera.position(), Vec3::new(2.0, 1.0, -3.0), epsilon = 1e-12);
    }

    #[test]
    fn frustum_getters_expose_bounds() {
        let mut camera = looking_down_negative_z();
        camera.set_frustum(-2.0, 2.0, -1.5, 1.5, 1.0, 20.0);
        assert_eq!(camera.left(), -2.0);
        assert_eq!(camera.right(), 2.0);
        assert_eq!(camera.bottom(), -1.5);
        assert_eq!(camera.top(), 1.5);
        assert_eq!(camera.near(), 1.0);
        assert_eq!(camera.far(), 20.0);
    }

    #[test]
    fn projection_maps_near_corners_to_ndc_unit_square() {
        let mut camera = looking_down_negative_z();
        camera.set_frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 4.0);

        // Near-plane corner (r, t, -n) should land at NDC (1, 1, -1).
        let corner = camera.projection_matrix() * crate::math::Vec4::point(1.0, 1.0, -2.0);
        assert_abs_diff_eq!(corner.cartesian(), Vec3::new(1.0, 1.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "near plane")]
    fn zero_near_plane_panics() {
        looking_down_negative_z().set_frustum(-1.0, 1.0, -1.0, 1.0, 0.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "parallel")]
    fn pivot_parallel_to_direction_panics() {
        let mut camera = looking_down_negative_z();
        camera.set_pivot(0.0, 0.0, -2.0);
    }
}
