//! Hand-built Euler rotation applied one axis at a time.

use rotation_types::PointSet;

use crate::elemental::{rotation_x, rotation_y, rotation_z};

/// Rotate by `[z, y, x]` angles in degrees, applying each elemental rotation
/// to the whole point set in turn: x first, then y, then z.
///
/// The caller reorders roll, pitch and yaw into `[yaw, pitch, roll]` before
/// calling. Three passes over the points are made (`points · Rxᵀ · Ryᵀ ·
/// Rzᵀ`); no combined matrix is formed. The net rotation is `Rz · Ry · Rx`,
/// the same one [`matrix`](crate::matrix()) builds in a single product, and
/// the two agree to rounding.
///
/// # Example
///
/// ```
/// use rotation_engine::euler_manual_all_degree;
/// use rotation_types::PointSet;
///
/// let points = PointSet::from_coords(&[[1.0, 0.0, 0.0]]);
/// // Roll 90 then yaw 90: x stays on x under roll, then turns to y.
/// let rotated = euler_manual_all_degree(&points, [90.0, 0.0, 90.0]);
///
/// assert!((rotated[0].y - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn euler_manual_all_degree(points: &PointSet, zyx: [f64; 3]) -> PointSet {
    let [z, y, x] = zyx.map(f64::to_radians);

    let rz = rotation_z(z);
    let ry = rotation_y(y);
    let rx = rotation_x(x);

    let rotated = points.transformed(&rx);
    let rotated = rotated.transformed(&ry);
    rotated.transformed(&rz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rotation_types::Cube;

    #[test]
    fn identity_for_zero_angles() {
        let cube = Cube::new(3.0);
        let out = euler_manual_all_degree(cube.vertices(), [0.0, 0.0, 0.0]);
        assert_eq!(&out, cube.vertices());
    }

    #[test]
    fn roll_applies_before_yaw() {
        // y turns to z under roll 90, and z is unaffected by yaw.
        let points = PointSet::from_coords(&[[0.0, 1.0, 0.0]]);
        let out = euler_manual_all_degree(&points, [90.0, 0.0, 90.0]);
        assert_relative_eq!(out[0].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(out[0].y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(out[0].z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn input_is_not_modified() {
        let cube = Cube::new(1.0);
        let before = cube.vertices().clone();
        let _ = euler_manual_all_degree(cube.vertices(), [15.0, 25.0, 35.0]);
        assert_eq!(&before, cube.vertices());
    }
}
