//! Single combined rotation matrix built from elemental matrices.

use rotation_types::{Matrix3, PointSet};

use crate::elemental::{rotation_x, rotation_y, rotation_z};

/// The combined matrix `Rz · Ry · Rx` for `[z, y, x]` angles in degrees.
///
/// # Example
///
/// ```
/// use rotation_engine::composition_matrix;
/// use rotation_types::is_rotation_matrix;
///
/// let m = composition_matrix([10.0, 20.0, 30.0]);
/// assert!(is_rotation_matrix(&m, 1e-9));
/// ```
#[must_use]
pub fn composition_matrix(zyx: [f64; 3]) -> Matrix3<f64> {
    let [z, y, x] = zyx.map(f64::to_radians);

    let ry = rotation_y(y);
    let rz = rotation_z(z);
    let rx = rotation_x(x);

    rz * ry * rx
}

/// Rotate by `[z, y, x]` angles in degrees through one combined matrix.
///
/// The caller reorders roll, pitch and yaw into `[yaw, pitch, roll]` before
/// calling. The matrix is formed once with [`composition_matrix`] and then
/// applied to every point.
#[must_use]
pub fn matrix(points: &PointSet, zyx: [f64; 3]) -> PointSet {
    points.transformed(&composition_matrix(zyx))
}
