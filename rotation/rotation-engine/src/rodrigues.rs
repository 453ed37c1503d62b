//! Axis-angle rotation with Rodrigues' formula.

use rotation_types::{Point3, PointSet, Vector3, normalize_or_zero};
use tracing::warn;

/// Rotate every point by `angle` radians about `axis`.
///
/// The axis is normalized, then each point `p` independently becomes
///
/// ```text
/// p·cos θ + (k × p)·sin θ + k·(k · p)·(1 − cos θ)
/// ```
///
/// A zero (or near-zero) axis describes no rotation: the points are returned
/// unchanged.
///
/// # Example
///
/// ```
/// use rotation_engine::rodrigues;
/// use rotation_types::{PointSet, Vector3};
///
/// let points = PointSet::from_coords(&[[1.0, 0.0, 0.0]]);
/// let rotated = rodrigues(&points, Vector3::new(0.0, 0.0, 5.0), std::f64::consts::FRAC_PI_2);
///
/// assert!(rotated[0].x.abs() < 1e-12);
/// assert!((rotated[0].y - 1.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::suboptimal_flops)] // Textbook form of the formula
pub fn rodrigues(points: &PointSet, axis: Vector3<f64>, angle: f64) -> PointSet {
    let k = normalize_or_zero(axis);
    if k == Vector3::zeros() {
        if angle != 0.0 {
            warn!(?axis, angle, "zero rotation axis, returning points unchanged");
        }
        return points.clone();
    }

    let (sin_a, cos_a) = angle.sin_cos();
    points
        .iter()
        .map(|p| {
            let v = p.coords;
            let rotated = v * cos_a + k.cross(&v) * sin_a + k * k.dot(&v) * (1.0 - cos_a);
            Point3::from(rotated)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rotation_types::Cube;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn zero_angle_is_identity() {
        let cube = Cube::new(3.0);
        let out = rodrigues(cube.vertices(), Vector3::new(1.0, 1.0, 0.0), 0.0);
        assert!(out.approx_eq(cube.vertices(), 1e-12));
    }

    #[test]
    fn zero_axis_is_identity() {
        let cube = Cube::new(3.0);
        let out = rodrigues(cube.vertices(), Vector3::zeros(), 1.0);
        assert_eq!(&out, cube.vertices());
    }

    #[test]
    fn half_turn_about_diagonal_swaps_axes() {
        let points = PointSet::from_coords(&[[1.0, 0.0, 0.0]]);
        let out = rodrigues(&points, Vector3::new(1.0, 1.0, 0.0), PI);
        assert_relative_eq!(out[0].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(out[0].y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(out[0].z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn full_turn_returns_to_start() {
        let cube = Cube::new(2.0);
        let out = rodrigues(cube.vertices(), Vector3::new(0.2, -0.4, 0.9), TAU);
        assert!(out.approx_eq(cube.vertices(), 1e-12));
    }

    #[test]
    fn points_on_axis_are_fixed() {
        let points = PointSet::from_coords(&[[2.0, 2.0, 2.0], [-1.0, -1.0, -1.0]]);
        let out = rodrigues(&points, Vector3::new(1.0, 1.0, 1.0), 1.3);
        assert!(out.approx_eq(&points, 1e-12));
    }
}
