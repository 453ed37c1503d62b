//! Quaternion rotation.

use rotation_types::{Matrix3, PointSet, Quaternion, UnitQuaternion};
use tracing::warn;

/// How far a quaternion's norm may stray from one before it is renormalized.
pub const QUATERNION_NORM_TOLERANCE: f64 = 1e-12;

/// Norm below which a quaternion carries no usable rotation.
const DEGENERATE_QUATERNION_NORM: f64 = 1e-12;

/// The rotation matrix for `q`, renormalizing it when needed.
///
/// `q` is used as-is when `|‖q‖ - 1| <= QUATERNION_NORM_TOLERANCE` and
/// divided by its norm otherwise. A quaternion whose norm is essentially
/// zero yields `None`.
#[must_use]
pub fn quaternion_matrix(q: &Quaternion<f64>) -> Option<Matrix3<f64>> {
    let norm = q.norm();
    let unit = if (norm - 1.0).abs() <= QUATERNION_NORM_TOLERANCE {
        UnitQuaternion::new_unchecked(*q)
    } else if norm < DEGENERATE_QUATERNION_NORM {
        return None;
    } else {
        UnitQuaternion::new_unchecked(*q / norm)
    };
    Some(unit.to_rotation_matrix().into_inner())
}

/// Rotate every point by the rotation `q` represents.
///
/// Non-unit quaternions are normalized first; the same rotation matrix is
/// then applied to every point. A zero quaternion leaves the points
/// unchanged and logs a warning.
///
/// # Example
///
/// ```
/// use rotation_engine::quaternion;
/// use rotation_types::{PointSet, quat_from_xyzw};
///
/// // 180 degrees about z, deliberately not unit length.
/// let q = quat_from_xyzw([0.0, 0.0, 2.0, 0.0]);
/// let rotated = quaternion(&PointSet::from_coords(&[[1.0, 0.0, 0.0]]), &q);
///
/// assert!((rotated[0].x + 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn quaternion(points: &PointSet, q: &Quaternion<f64>) -> PointSet {
    match quaternion_matrix(q) {
        Some(m) => points.transformed(&m),
        None => {
            warn!(?q, "degenerate quaternion, returning points unchanged");
            points.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rotation_types::{Cube, Vector3, is_rotation_matrix, quat_from_xyzw};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_quaternion_is_identity() {
        let cube = Cube::new(3.0);
        let out = quaternion(cube.vertices(), &Quaternion::identity());
        assert!(out.approx_eq(cube.vertices(), 1e-12));
    }

    #[test]
    fn scaled_quaternion_rotates_like_unit() {
        let unit = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.8).into_inner();
        let points = Cube::new(2.0).vertices().clone();
        let a = quaternion(&points, &unit);
        let b = quaternion(&points, &(unit * 5.0));
        assert!(a.approx_eq(&b, 1e-12));
    }

    #[test]
    fn zero_quaternion_passes_through() {
        let points = Cube::default().vertices().clone();
        let q = quat_from_xyzw([0.0; 4]);
        assert_eq!(quaternion(&points, &q), points);
        assert!(quaternion_matrix(&q).is_none());
    }

    #[test]
    fn quarter_turn_about_x() {
        let half = FRAC_PI_2 / 2.0;
        let q = quat_from_xyzw([half.sin(), 0.0, 0.0, half.cos()]);
        let out = quaternion(&PointSet::from_coords(&[[0.0, 1.0, 0.0]]), &q);
        assert_relative_eq!(out[0].z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(out[0].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn matrix_is_rotation_after_normalization() {
        let q = quat_from_xyzw([0.3, -1.2, 0.5, 2.0]);
        let m = quaternion_matrix(&q).unwrap_or_else(Matrix3::zeros);
        assert!(is_rotation_matrix(&m, 1e-12));
    }
}
