//! The rotation algorithms as tagged variants.

use rotation_types::{AxisAngle, AxisOrder, PointSet, Quaternion};

use crate::{euler, euler_manual_all_degree, euler_one_degree, matrix, quaternion, rodrigues};

/// One rotation algorithm together with the arguments it consumes.
///
/// Each variant keeps its own convention; they are not routed through a
/// shared composition helper:
///
/// | Variant | Input | Convention |
/// |---------|-------|------------|
/// | `EulerOneDegree` | one angle (deg), axis label | single elemental matrix |
/// | `Euler` | three angles (deg), [`AxisOrder`] | order's frame and letters |
/// | `EulerManual` | `[z, y, x]` (deg) | apply Rx, then Ry, then Rz |
/// | `Matrix` | `[z, y, x]` (deg) | one product `Rz · Ry · Rx` |
/// | `Quaternion` | quaternion, any norm | normalized, then applied |
/// | `Rodrigues` | axis, angle (rad) | closed-form per point |
///
/// # Example
///
/// ```
/// use rotation_engine::RotationStrategy;
/// use rotation_types::Cube;
///
/// let cube = Cube::new(3.0);
/// let strategy = RotationStrategy::Matrix { zyx: [30.0, 0.0, 0.0] };
///
/// assert_eq!(strategy.name(), "matrix");
/// assert_eq!(strategy.apply(cube.vertices()).len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RotationStrategy {
    /// [`euler_one_degree`]: rotate about a single named axis.
    EulerOneDegree {
        /// Angle in degrees.
        angle: f64,
        /// Axis letter, `'X'`, `'Y'` or `'Z'`.
        label: char,
    },

    /// [`euler()`]: three angles composed under an explicit axis order.
    Euler {
        /// Angles in degrees, in axis-order sequence.
        angles: [f64; 3],
        /// Axis letters and frame.
        order: AxisOrder,
    },

    /// [`euler_manual_all_degree`]: sequential elemental rotations.
    EulerManual {
        /// `[z, y, x]` angles in degrees.
        zyx: [f64; 3],
    },

    /// [`matrix()`]: one combined matrix.
    Matrix {
        /// `[z, y, x]` angles in degrees.
        zyx: [f64; 3],
    },

    /// [`quaternion()`]: rotation by a (possibly non-unit) quaternion.
    Quaternion(Quaternion<f64>),

    /// [`rodrigues()`]: Rodrigues' formula about an axis.
    Rodrigues(AxisAngle),
}

impl RotationStrategy {
    /// Stable algorithm name, used as the benchmark key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EulerOneDegree { .. } => "euler_one_degree",
            Self::Euler { .. } => "euler",
            Self::EulerManual { .. } => "euler_manual_all_degree",
            Self::Matrix { .. } => "matrix",
            Self::Quaternion(_) => "quaternion",
            Self::Rodrigues(_) => "rodrigues",
        }
    }

    /// Rotate `points`, returning a new point set.
    #[must_use]
    pub fn apply(&self, points: &PointSet) -> PointSet {
        match self {
            Self::EulerOneDegree { angle, label } => euler_one_degree(points, *angle, *label),
            Self::Euler { angles, order } => euler(points, *angles, order),
            Self::EulerManual { zyx } => euler_manual_all_degree(points, *zyx),
            Self::Matrix { zyx } => matrix(points, *zyx),
            Self::Quaternion(q) => quaternion(points, q),
            Self::Rodrigues(aa) => rodrigues(points, aa.axis, aa.angle),
        }
    }
}
