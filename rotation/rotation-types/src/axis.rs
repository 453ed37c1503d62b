//! Physical axes and Euler axis orders.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Unit, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{RotationError, RotationResult};

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The x axis (roll).
    X,
    /// The y axis (pitch).
    Y,
    /// The z axis (yaw).
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Parse a single axis letter, ignoring case.
    ///
    /// # Example
    ///
    /// ```
    /// use rotation_types::Axis;
    ///
    /// assert_eq!(Axis::from_label('y'), Some(Axis::Y));
    /// assert_eq!(Axis::from_label('W'), None);
    /// ```
    #[must_use]
    pub const fn from_label(label: char) -> Option<Self> {
        match label.to_ascii_lowercase() {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }

    /// Position of the axis in `[x, y, z]`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit vector along the axis.
    #[must_use]
    pub fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            Self::X => Vector3::x_axis(),
            Self::Y => Vector3::y_axis(),
            Self::Z => Vector3::z_axis(),
        }
    }

    /// Uppercase axis letter.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether elemental rotations turn about fixed or moving axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Frame {
    /// Space-fixed axes. Each new rotation pre-multiplies.
    Extrinsic,
    /// Body-fixed axes that move with the body. Each new rotation
    /// post-multiplies.
    Intrinsic,
}

/// An Euler axis sequence: which axis each of three angles turns about,
/// composed in a given frame.
///
/// The textual form follows the common rotation-library convention. With
/// angles `θ1, θ2, θ3` about axes `a1, a2, a3`:
///
/// - **lowercase** letters (`"xyz"`) are extrinsic:
///   `R = R_a3(θ3) · R_a2(θ2) · R_a1(θ1)`.
/// - **uppercase** letters (`"ZYX"`) are intrinsic:
///   `R = R_a1(θ1) · R_a2(θ2) · R_a3(θ3)`.
///
/// So extrinsic `xyz` with `[roll, pitch, yaw]` and intrinsic `ZYX` with
/// `[yaw, pitch, roll]` are the same rotation.
///
/// Mixed case is rejected, as are repeated consecutive axes.
///
/// # Example
///
/// ```
/// use rotation_types::{Axis, AxisOrder, Frame};
///
/// let order: AxisOrder = "ZYX".parse().unwrap();
/// assert_eq!(order.frame(), Frame::Intrinsic);
/// assert_eq!(order.axes(), [Axis::Z, Axis::Y, Axis::X]);
/// assert_eq!(order.to_string(), "ZYX");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct AxisOrder {
    axes: [Axis; 3],
    frame: Frame,
}

impl AxisOrder {
    /// Extrinsic x, then y, then z (`"xyz"`): roll, pitch, yaw about fixed axes.
    pub const EXTRINSIC_XYZ: Self = Self {
        axes: [Axis::X, Axis::Y, Axis::Z],
        frame: Frame::Extrinsic,
    };

    /// Intrinsic z, then y, then x (`"ZYX"`): yaw, pitch, roll about body axes.
    pub const INTRINSIC_ZYX: Self = Self {
        axes: [Axis::Z, Axis::Y, Axis::X],
        frame: Frame::Intrinsic,
    };

    /// Build an axis order directly.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidAxisOrder`] if two consecutive axes
    /// are the same.
    pub fn new(axes: [Axis; 3], frame: Frame) -> RotationResult<Self> {
        let order = Self { axes, frame };
        if axes[0] == axes[1] || axes[1] == axes[2] {
            return Err(RotationError::invalid_order(
                &order.to_string(),
                "consecutive axes must differ",
            ));
        }
        Ok(order)
    }

    /// The three axes, in the order the angles are listed.
    #[must_use]
    pub const fn axes(&self) -> [Axis; 3] {
        self.axes
    }

    /// The composition frame.
    #[must_use]
    pub const fn frame(&self) -> Frame {
        self.frame
    }

    /// Compose three elemental rotations (radians) into one quaternion.
    ///
    /// Angle `i` turns about `axes()[i]`. Extrinsic orders pre-multiply each
    /// new rotation (`q = r · q`), intrinsic orders post-multiply it
    /// (`q = q · r`).
    #[must_use]
    pub fn to_quaternion(&self, angles_rad: [f64; 3]) -> UnitQuaternion<f64> {
        let mut q = UnitQuaternion::identity();
        for (axis, angle) in self.axes.iter().zip(angles_rad) {
            let r = UnitQuaternion::from_axis_angle(&axis.unit(), angle);
            match self.frame {
                Frame::Extrinsic => q = r * q,
                Frame::Intrinsic => q *= r,
            }
        }
        q
    }
}

impl Default for AxisOrder {
    fn default() -> Self {
        Self::EXTRINSIC_XYZ
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in self.axes {
            let c = match self.frame {
                Frame::Extrinsic => axis.label().to_ascii_lowercase(),
                Frame::Intrinsic => axis.label(),
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for AxisOrder {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 3 {
            return Err(RotationError::invalid_order(
                s,
                "expected exactly three axis letters",
            ));
        }

        let frame = if chars.iter().all(char::is_ascii_lowercase) {
            Frame::Extrinsic
        } else if chars.iter().all(char::is_ascii_uppercase) {
            Frame::Intrinsic
        } else {
            return Err(RotationError::invalid_order(
                s,
                "mixed-case orders are not supported",
            ));
        };

        let mut axes = [Axis::X; 3];
        for (slot, &c) in axes.iter_mut().zip(&chars) {
            *slot = Axis::from_label(c)
                .ok_or_else(|| RotationError::invalid_order(s, "axes must be x, y or z"))?;
        }

        Self::new(axes, frame)
    }
}

impl TryFrom<String> for AxisOrder {
    type Error = RotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AxisOrder> for String {
    fn from(order: AxisOrder) -> Self {
        order.to_string()
    }
}
