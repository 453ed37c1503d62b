//! Euler-angle rotation: one axis at a time, or a full axis sequence.

use rotation_types::{Axis, AxisOrder, Matrix3, PointSet};
use tracing::warn;

use crate::elemental::elemental;

/// Rotate every point by `angle` degrees about the axis named by `label`.
///
/// `label` is `'X'`, `'Y'` or `'Z'` (case-insensitive). Any other label
/// leaves the points unchanged and logs a warning.
///
/// Intended for operations where exactly one Euler angle is non-zero.
///
/// # Example
///
/// ```
/// use rotation_engine::euler_one_degree;
/// use rotation_types::PointSet;
///
/// let points = PointSet::from_coords(&[[1.0, 0.0, 0.0]]);
/// let rotated = euler_one_degree(&points, 90.0, 'Z');
///
/// assert!(rotated[0].x.abs() < 1e-12);
/// assert!((rotated[0].y - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn euler_one_degree(points: &PointSet, angle: f64, label: char) -> PointSet {
    let Some(axis) = Axis::from_label(label) else {
        warn!(label = %label, "unknown rotation axis, returning points unchanged");
        return points.clone();
    };
    points.transformed(&elemental(axis, angle.to_radians()))
}

/// The matrix an [`AxisOrder`] produces for three angles in degrees.
///
/// Composition goes through [`AxisOrder::to_quaternion`], the same routine
/// the quaternion conversions use, and is then expanded to a matrix once.
#[must_use]
pub fn euler_matrix(angles: [f64; 3], order: &AxisOrder) -> Matrix3<f64> {
    order
        .to_quaternion(angles.map(f64::to_radians))
        .to_rotation_matrix()
        .into_inner()
}

/// Rotate every point by three Euler angles (degrees) under `order`.
///
/// `angles[i]` turns about `order.axes()[i]`, and the frame of `order`
/// decides whether the sequence is extrinsic or intrinsic. The usual call
/// passes `[yaw, pitch, roll]` with [`AxisOrder::INTRINSIC_ZYX`].
///
/// # Example
///
/// ```
/// use rotation_engine::euler;
/// use rotation_types::{AxisOrder, PointSet};
///
/// let points = PointSet::from_coords(&[[0.0, 1.0, 0.0]]);
/// // Yaw 90 degrees, no pitch or roll.
/// let rotated = euler(&points, [90.0, 0.0, 0.0], &AxisOrder::INTRINSIC_ZYX);
///
/// assert!((rotated[0].x + 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn euler(points: &PointSet, angles: [f64; 3], order: &AxisOrder) -> PointSet {
    points.transformed(&euler_matrix(angles, order))
}
