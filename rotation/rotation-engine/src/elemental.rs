//! Elemental rotation matrices about a single axis.
//!
//! Entries are written out from sine and cosine directly rather than
//! obtained from a rotation type, so the Euler, manual and matrix
//! algorithms all start from the same hand-derived building blocks.

use rotation_types::{Axis, Matrix3};

/// Rotation about x by `angle` radians.
#[must_use]
#[rustfmt::skip]
pub fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0,   c,  -s,
        0.0,   s,   c,
    )
}

/// Rotation about y by `angle` radians.
#[must_use]
#[rustfmt::skip]
pub fn rotation_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
          c, 0.0,   s,
        0.0, 1.0, 0.0,
         -s, 0.0,   c,
    )
}

/// Rotation about z by `angle` radians.
#[must_use]
#[rustfmt::skip]
pub fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
          c,  -s, 0.0,
          s,   c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Rotation about `axis` by `angle` radians.
#[must_use]
pub fn elemental(axis: Axis, angle: f64) -> Matrix3<f64> {
    match axis {
        Axis::X => rotation_x(angle),
        Axis::Y => rotation_y(angle),
        Axis::Z => rotation_z(angle),
    }
}
