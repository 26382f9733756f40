//! 4×4 matrix constructors and products.
//!
//! Matrices are column-major (`m[col * 4 + row]`) and follow the
//! column-vector convention, so `clip = P · V · point`. None of the
//! constructors validate their arguments: `near == far`, `left == right`
//! and friends divide by zero and yield a non-finite matrix.

pub use glam::Mat4;
use glam::Vec3;

use super::vector::{cross, dot, normalize, subtract};

/// The identity matrix.
#[inline]
#[must_use]
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Matrix product `a · b`.
///
/// Pass projection first and view second to get a transform that applies
/// the view before the projection.
#[inline]
#[must_use]
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    a * b
}

/// Off-center perspective projection (OpenGL clip space, depth in
/// `[-1, 1]`).
#[must_use]
pub fn frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let mut m = [0.0_f32; 16];
    m[0] = 2.0 * near / (right - left);
    m[5] = 2.0 * near / (top - bottom);
    m[8] = (right + left) / (right - left);
    m[9] = (top + bottom) / (top - bottom);
    m[10] = (far + near) / (near - far);
    m[11] = -1.0;
    m[14] = 2.0 * far * near / (near - far);
    Mat4::from_cols_array(&m)
}

/// Symmetric perspective projection from a vertical field of view in
/// degrees, built on [`frustum`].
#[must_use]
pub fn perspective(fovy_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let top = near * (fovy_deg.to_radians() / 2.0).tan();
    let right = top * aspect;
    frustum(-right, right, -top, top, near, far)
}

/// Orthographic projection.
///
/// `near` may be negative so a box centered on the eye (e.g. `[-10, 10]`)
/// is allowed. The y scale is `-2 * bt` with `bt = 1 / (bottom - top)`,
/// positive whenever `top > bottom`.
#[must_use]
pub fn ortho(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let lr = 1.0 / (left - right);
    let bt = 1.0 / (bottom - top);
    let nf = 1.0 / (near - far);

    let mut m = [0.0_f32; 16];
    m[0] = -2.0 * lr;
    m[5] = -2.0 * bt;
    m[10] = 2.0 * nf;
    m[12] = (left + right) * lr;
    m[13] = (top + bottom) * bt;
    m[14] = (far + near) * nf;
    m[15] = 1.0;
    Mat4::from_cols_array(&m)
}

/// View matrix looking from `eye` toward `center`.
///
/// If `up` is parallel to the view direction the right axis collapses to
/// zero and the result is singular. Callers must not pass collinear
/// vectors; nothing here corrects for it.
#[must_use]
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let z = normalize(subtract(eye, center));
    let x = normalize(cross(up, z));
    let y = normalize(cross(z, x));

    Mat4::from_cols_array(&[
        x.x,
        y.x,
        z.x,
        0.0,
        x.y,
        y.y,
        z.y,
        0.0,
        x.z,
        y.z,
        z.z,
        0.0,
        -dot(x, eye),
        -dot(y, eye),
        -dot(z, eye),
        1.0,
    ])
}
