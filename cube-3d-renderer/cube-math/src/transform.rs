//! Builders that write camera and model transforms into an existing [`Mat4`].
//!
//! Every builder documents exactly which elements it writes. Some of them reset the whole matrix
//! first, others only patch a handful of elements and rely on the caller to have initialized the
//! rest (usually to [`Mat4::IDENTITY`]).

use crate::matrix::Mat4;
use crate::vector::{cross, dot, Vec3};

/// Patches a rotation of `angle` radians around the X axis into `m`.
///
/// Only `m22`, `m33`, `m32` and `m23` are written, every other element keeps whatever value it
/// already had. This does not build a rotation matrix on its own: start from [`Mat4::IDENTITY`]
/// to get a pure rotation.
pub fn rotate_x(m: &mut Mat4, angle: f32) {
    let (sin, cos) = angle.sin_cos();

    m.m22 = cos;
    m.m33 = cos;
    m.m32 = sin;
    m.m23 = -sin;
}

/// Patches a rotation of `angle` radians around the Z axis into the top-left 2x2 block of `m`.
///
/// Only `m11`, `m22`, `m21` and `m12` are written. Same contract as [`rotate_x`].
pub fn rotate_z(m: &mut Mat4, angle: f32) {
    let (sin, cos) = angle.sin_cos();

    m.m11 = cos;
    m.m22 = cos;
    m.m21 = sin;
    m.m12 = -sin;
}

/// Resets `m` to the identity and stores `offset` in the translation column.
pub fn translate(m: &mut Mat4, offset: Vec3) {
    m.set_identity();

    m.m14 = offset[0];
    m.m24 = offset[1];
    m.m34 = offset[2];
}

/// Overwrites all of `m` with an off-center orthographic projection.
///
/// Depth is mapped to `[-1, 1]`. Nothing guards against `left == right`, `bottom == top` or
/// `z_near == z_far`; those produce non-finite elements.
pub fn make_ortho_2d(
    m: &mut Mat4,
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    z_near: f32,
    z_far: f32,
) {
    let width = right - left;
    let height = top - bottom;
    let depth = z_far - z_near;

    m.m11 = 2.0 / width;
    m.m12 = 0.0;
    m.m13 = 0.0;
    m.m14 = -(right + left) / width;

    m.m21 = 0.0;
    m.m22 = 2.0 / height;
    m.m23 = 0.0;
    m.m24 = -(top + bottom) / height;

    m.m31 = 0.0;
    m.m32 = 0.0;
    m.m33 = -2.0 / depth;
    m.m34 = -(z_far + z_near) / depth;

    m.m41 = 0.0;
    m.m42 = 0.0;
    m.m43 = 0.0;
    m.m44 = 1.0;
}

/// Builds a right-handed view matrix looking from `eye` towards `target`.
///
/// The camera basis is derived with Gram-Schmidt:
/// * `z = normalize(eye - target)`
/// * `x = normalize(cross(normalize(up), z))`
/// * `y = cross(z, x)`, already unit length since `z` and `x` are orthonormal
///
/// `m` is reset to the identity, then column `n` (for `n` in 1..=3) receives the `n`-th axis in
/// rows 1 to 3 and `-dot(axis, eye)` in row 4. The `m14..m44` column is never written, so it keeps
/// the `(0, 0, 0, 1)` left behind by the reset.
///
/// `up` is taken by value and only a local copy is normalized.
///
/// `eye` and `target` must differ and `up` must not be parallel to the view direction, otherwise
/// the result contains NaNs.
pub fn make_look_at(m: &mut Mat4, target: Vec3, eye: Vec3, up: Vec3) {
    let mut z_axis = eye - target;
    z_axis.normalize();

    let mut x_axis = cross(up.normalized(), z_axis);
    x_axis.normalize();

    let y_axis = cross(z_axis, x_axis);

    m.set_identity();

    m.m11 = x_axis[0];
    m.m21 = x_axis[1];
    m.m31 = x_axis[2];
    m.m41 = -dot(x_axis, eye);

    m.m12 = y_axis[0];
    m.m22 = y_axis[1];
    m.m32 = y_axis[2];
    m.m42 = -dot(y_axis, eye);

    m.m13 = z_axis[0];
    m.m23 = z_axis[1];
    m.m33 = z_axis[2];
    m.m43 = -dot(z_axis, eye);
}

impl Mat4 {
    /// A new matrix built by [`translate`]
    pub fn from_translation(offset: Vec3) -> Self {
        let mut m = Mat4::ZERO;
        translate(&mut m, offset);
        m
    }

    /// A pure rotation around the X axis, [`rotate_x`] applied to the identity
    pub fn from_rotation_x(angle: f32) -> Self {
        let mut m = Mat4::IDENTITY;
        rotate_x(&mut m, angle);
        m
    }

    /// A pure rotation around the Z axis, [`rotate_z`] applied to the identity
    pub fn from_rotation_z(angle: f32) -> Self {
        let mut m = Mat4::IDENTITY;
        rotate_z(&mut m, angle);
        m
    }

    /// A new matrix built by [`make_ortho_2d`]
    pub fn ortho_2d(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        let mut m = Mat4::ZERO;
        make_ortho_2d(&mut m, left, right, bottom, top, z_near, z_far);
        m
    }

    /// A new matrix built by [`make_look_at`]
    pub fn look_at(target: Vec3, eye: Vec3, up: Vec3) -> Self {
        let mut m = Mat4::ZERO;
        make_look_at(&mut m, target, eye, up);
        m
    }
}
