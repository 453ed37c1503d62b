//! Orientation representations and the conversions between them.
//!
//! A caller describes each orientation change as a [`RollPitchYaw`] triple in
//! degrees. The rotation algorithms each want a different representation:
//!
//! - Euler angles with an explicit [`AxisOrder`] ([`EulerAngles`])
//! - a quaternion ([`euler_to_quaternion`])
//! - an axis and an angle ([`euler_to_axis_angle`])
//!
//! Conversions always take the axis order explicitly. There is no global
//! convention.

use nalgebra::{Quaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Axis, AxisOrder};

/// Total rotation angle (radians) below which the axis is left unscaled.
pub const AXIS_ANGLE_EPSILON: f64 = 1e-6;

/// One orientation change: roll about x, pitch about y, yaw about z, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollPitchYaw {
    /// Rotation about x in degrees.
    pub roll: f64,
    /// Rotation about y in degrees.
    pub pitch: f64,
    /// Rotation about z in degrees.
    pub yaw: f64,
}

impl RollPitchYaw {
    /// Create a roll/pitch/yaw triple in degrees.
    #[must_use]
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// The angles as `[roll, pitch, yaw]`.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }

    /// The angles reordered as `[yaw, pitch, roll]` (z, y, x).
    #[must_use]
    pub const fn zyx(&self) -> [f64; 3] {
        [self.yaw, self.pitch, self.roll]
    }

    /// Angle about `axis` in degrees.
    #[must_use]
    pub const fn angle(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.roll,
            Axis::Y => self.pitch,
            Axis::Z => self.yaw,
        }
    }

    /// Axes with a non-zero angle, in x, y, z order.
    ///
    /// # Example
    ///
    /// ```
    /// use rotation_types::{Axis, RollPitchYaw};
    ///
    /// let op = RollPitchYaw::new(30.0, 0.0, -5.0);
    /// assert_eq!(op.non_zero_axes(), vec![Axis::X, Axis::Z]);
    /// ```
    #[must_use]
    pub fn non_zero_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.angle(axis) != 0.0)
            .collect()
    }
}

impl From<[f64; 3]> for RollPitchYaw {
    fn from([roll, pitch, yaw]: [f64; 3]) -> Self {
        Self::new(roll, pitch, yaw)
    }
}

impl std::fmt::Display for RollPitchYaw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.roll, self.pitch, self.yaw)
    }
}

/// Three Euler angles in degrees together with the axis order they follow.
///
/// `angles[i]` turns about `order.axes()[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EulerAngles {
    /// Angles in degrees, listed in axis-order sequence.
    pub angles: [f64; 3],
    /// How the angles map onto axes and compose.
    pub order: AxisOrder,
}

impl EulerAngles {
    /// Create Euler angles (degrees) for an axis order.
    #[must_use]
    pub const fn new(angles: [f64; 3], order: AxisOrder) -> Self {
        Self { angles, order }
    }

    /// Euler angles `[roll, pitch, yaw]` under `order`.
    ///
    /// With [`AxisOrder::EXTRINSIC_XYZ`] this is the usual roll-pitch-yaw
    /// orientation.
    #[must_use]
    pub const fn from_roll_pitch_yaw(rpy: RollPitchYaw, order: AxisOrder) -> Self {
        Self::new(rpy.as_array(), order)
    }

    /// The angles converted to radians.
    #[must_use]
    pub fn radians(&self) -> [f64; 3] {
        self.angles.map(f64::to_radians)
    }
}

/// A rotation by `angle` radians about `axis`.
///
/// `axis` is unit length except for the degenerate near-zero rotation, where
/// it is the unscaled rotation vector (and so effectively zero).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisAngle {
    /// Rotation axis.
    pub axis: Vector3<f64>,
    /// Rotation angle in radians.
    pub angle: f64,
}

impl AxisAngle {
    /// Create an axis-angle pair.
    #[must_use]
    pub const fn new(axis: Vector3<f64>, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// The rotation vector `axis · angle`.
    #[must_use]
    pub fn rotation_vector(&self) -> Vector3<f64> {
        self.axis * self.angle
    }
}

/// Build a quaternion from `[x, y, z, w]` components (scalar last).
#[must_use]
pub fn quat_from_xyzw([x, y, z, w]: [f64; 4]) -> Quaternion<f64> {
    Quaternion::new(w, x, y, z)
}

/// Split a quaternion into `[x, y, z, w]` components (scalar last).
#[must_use]
pub fn quat_to_xyzw(q: &Quaternion<f64>) -> [f64; 4] {
    [q.i, q.j, q.k, q.w]
}

/// Convert Euler angles to the equivalent unit quaternion.
///
/// The elemental rotations are composed exactly as
/// [`AxisOrder::to_quaternion`] prescribes for `euler.order`.
///
/// # Example
///
/// ```
/// use rotation_types::{AxisOrder, EulerAngles, euler_to_quaternion, quat_to_xyzw};
///
/// let euler = EulerAngles::new([0.0, 0.0, 90.0], AxisOrder::EXTRINSIC_XYZ);
/// let [x, y, z, w] = quat_to_xyzw(&euler_to_quaternion(&euler));
///
/// let half = std::f64::consts::FRAC_1_SQRT_2;
/// assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
/// assert!((z - half).abs() < 1e-12 && (w - half).abs() < 1e-12);
/// ```
#[must_use]
pub fn euler_to_quaternion(euler: &EulerAngles) -> Quaternion<f64> {
    euler.order.to_quaternion(euler.radians()).into_inner()
}

/// Convert Euler angles to an axis and total rotation angle.
///
/// The angle is the norm of the rotation vector, in `[0, π]`. The axis is the
/// rotation vector divided by the angle, unless the angle is below
/// [`AXIS_ANGLE_EPSILON`]; then the rotation vector is returned unscaled,
/// which for such tiny rotations is effectively the zero vector.
///
/// # Example
///
/// ```
/// use rotation_types::{AxisOrder, EulerAngles, euler_to_axis_angle};
///
/// let euler = EulerAngles::new([0.0, 90.0, 0.0], AxisOrder::EXTRINSIC_XYZ);
/// let aa = euler_to_axis_angle(&euler);
///
/// assert!((aa.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!((aa.axis.y - 1.0).abs() < 1e-12);
///
/// let none = euler_to_axis_angle(&EulerAngles::new([0.0; 3], AxisOrder::EXTRINSIC_XYZ));
/// assert_eq!(none.angle, 0.0);
/// assert_eq!(none.axis.norm(), 0.0);
/// ```
#[must_use]
pub fn euler_to_axis_angle(euler: &EulerAngles) -> AxisAngle {
    let rotvec = euler.order.to_quaternion(euler.radians()).scaled_axis();
    let angle = rotvec.norm();
    let divisor = if angle > AXIS_ANGLE_EPSILON { angle } else { 1.0 };
    AxisAngle::new(rotvec / divisor, angle)
}
