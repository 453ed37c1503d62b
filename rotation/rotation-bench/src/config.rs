//! Configuration and presets for a comparison run.
//!
//! [`CompareConfig`] lists the cube, the operations applied to it and the
//! methods compared on each operation.
//!
//! # Presets
//!
//! [`OperationPreset`] reproduces the standard operation sets:
//!
//! - [`OperationPreset::GimbalLock`] - four orientations at or near pitch ±90°
//! - [`OperationPreset::SingleAxis`] - 10°, 20°, 30°, 40° about one axis
//! - [`OperationPreset::TwoAxis`] - the same angles on two axes at once
//! - [`OperationPreset::ThreeAxis`] - the same angles on all three axes
//!
//! # Example
//!
//! ```
//! use rotation_bench::{CompareConfig, Method, OperationPreset};
//! use rotation_types::Axis;
//!
//! let config = CompareConfig::default()
//!     .with_preset(OperationPreset::SingleAxis(Axis::Y))
//!     .with_methods(vec![Method::Matrix, Method::Quaternion]);
//!
//! assert_eq!(config.operations.len(), 4);
//! assert_eq!(config.methods.len(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use rotation_types::{Axis, AxisOrder, RollPitchYaw, RotationError, RotationResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Angles, in degrees, used by the single, two and three axis presets.
pub const PRESET_ANGLES: [f64; 4] = [10.0, 20.0, 30.0, 40.0];

/// A rotation method as offered to the person running the comparison.
///
/// Methods map onto algorithms: [`Method::Euler`] picks the single-axis or the
/// full Euler algorithm per operation, the others map one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Library Euler rotation, or a single elemental rotation when only one
    /// angle is non-zero.
    Euler,
    /// Elemental rotations applied one after another.
    EulerManual,
    /// One combined rotation matrix.
    Matrix,
    /// Quaternion rotation.
    Quaternion,
    /// Rodrigues' axis-angle formula.
    Rodrigues,
}

impl Method {
    /// Every method, in display order.
    pub const ALL: [Self; 5] = [
        Self::Euler,
        Self::EulerManual,
        Self::Matrix,
        Self::Quaternion,
        Self::Rodrigues,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Euler => "Euler",
            Self::EulerManual => "Euler Manual",
            Self::Matrix => "Matrix",
            Self::Quaternion => "Quaternion",
            Self::Rodrigues => "Rodrigues",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = RotationError;

    /// Parse a display label. Matching ignores surrounding whitespace.
    fn from_str(s: &str) -> RotationResult<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label() == trimmed)
            .ok_or_else(|| RotationError::UnknownMethod {
                name: s.to_owned(),
            })
    }
}

/// A named set of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationPreset {
    /// `[0, 90, 0]`, `[45, 10, 0]`, `[30, -90, 10]`, `[60, 90, 50]`.
    GimbalLock,
    /// Each preset angle about one axis.
    SingleAxis(Axis),
    /// Each preset angle on two axes at once.
    TwoAxis(Axis, Axis),
    /// Each preset angle on all three axes.
    ThreeAxis,
}

impl OperationPreset {
    /// The operations this preset stands for.
    #[must_use]
    pub fn operations(self) -> Vec<RollPitchYaw> {
        match self {
            Self::GimbalLock => vec![
                RollPitchYaw::new(0.0, 90.0, 0.0),
                RollPitchYaw::new(45.0, 10.0, 0.0),
                RollPitchYaw::new(30.0, -90.0, 10.0),
                RollPitchYaw::new(60.0, 90.0, 50.0),
            ],
            Self::SingleAxis(axis) => on_axes(&[axis]),
            Self::TwoAxis(a, b) => on_axes(&[a, b]),
            Self::ThreeAxis => on_axes(&Axis::ALL),
        }
    }
}

fn on_axes(axes: &[Axis]) -> Vec<RollPitchYaw> {
    PRESET_ANGLES
        .iter()
        .map(|&angle| {
            let mut rpy = [0.0; 3];
            for axis in axes {
                rpy[axis.index()] = angle;
            }
            RollPitchYaw::from(rpy)
        })
        .collect()
}

/// Configuration for a comparison run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompareConfig {
    /// Edge length of the cube being rotated.
    pub cube_size: f64,

    /// Operations, applied one at a time to the unrotated cube.
    pub operations: Vec<RollPitchYaw>,

    /// Methods compared on every operation, in order.
    pub methods: Vec<Method>,

    /// Axis order used to turn an operation into a quaternion and an
    /// axis-angle pair.
    pub conversion_order: AxisOrder,

    /// Axis order for the full Euler algorithm. Its angles are the
    /// operation's `[yaw, pitch, roll]`.
    pub euler_order: AxisOrder,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            cube_size: 3.0,
            operations: OperationPreset::ThreeAxis.operations(),
            methods: Method::ALL.to_vec(),
            conversion_order: AxisOrder::EXTRINSIC_XYZ,
            euler_order: AxisOrder::INTRINSIC_ZYX,
        }
    }
}

impl CompareConfig {
    /// Default configuration running the given preset.
    #[must_use]
    pub fn for_preset(preset: OperationPreset) -> Self {
        Self::default().with_preset(preset)
    }

    /// Set the cube size.
    #[must_use]
    pub fn with_cube_size(mut self, size: f64) -> Self {
        self.cube_size = size;
        self
    }

    /// Replace the operations.
    #[must_use]
    pub fn with_operations(mut self, operations: Vec<RollPitchYaw>) -> Self {
        self.operations = operations;
        self
    }

    /// Replace the operations with a preset's.
    #[must_use]
    pub fn with_preset(self, preset: OperationPreset) -> Self {
        self.with_operations(preset.operations())
    }

    /// Replace the methods.
    #[must_use]
    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    /// Set the quaternion and axis-angle conversion order.
    #[must_use]
    pub fn with_conversion_order(mut self, order: AxisOrder) -> Self {
        self.conversion_order = order;
        self
    }

    /// Set the full Euler algorithm's axis order.
    #[must_use]
    pub fn with_euler_order(mut self, order: AxisOrder) -> Self {
        self.euler_order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_labels_round_trip() {
        for m in Method::ALL {
            assert_eq!(m.label().parse::<Method>(), Ok(m));
        }
        assert_eq!(" Euler Manual ".parse::<Method>(), Ok(Method::EulerManual));
    }

    #[test]
    fn unknown_method_is_an_error() {
        let err = "Geometric Algebra".parse::<Method>().unwrap_err();
        assert!(matches!(err, RotationError::UnknownMethod { ref name } if name == "Geometric Algebra"));
        assert!("euler".parse::<Method>().is_err());
    }

    #[test]
    fn default_matches_standard_run() {
        let config = CompareConfig::default();
        assert!((config.cube_size - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.methods, Method::ALL);
        assert_eq!(config.conversion_order.to_string(), "xyz");
        assert_eq!(config.euler_order.to_string(), "ZYX");
        assert_eq!(config.operations[0], RollPitchYaw::new(10.0, 10.0, 10.0));
        assert_eq!(config.operations[3], RollPitchYaw::new(40.0, 40.0, 40.0));
    }

    #[test]
    fn single_axis_preset_sets_one_angle() {
        let ops = OperationPreset::SingleAxis(Axis::Z).operations();
        assert_eq!(ops.len(), 4);
        for (op, angle) in ops.iter().zip(PRESET_ANGLES) {
            assert_eq!(*op, RollPitchYaw::new(0.0, 0.0, angle));
            assert_eq!(op.non_zero_axes(), [Axis::Z]);
        }
    }

    #[test]
    fn two_axis_preset_sets_both_angles() {
        let ops = OperationPreset::TwoAxis(Axis::X, Axis::Z).operations();
        assert_eq!(ops[1], RollPitchYaw::new(20.0, 0.0, 20.0));
    }

    #[test]
    fn gimbal_lock_preset() {
        let ops = OperationPreset::GimbalLock.operations();
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[2], RollPitchYaw::new(30.0, -90.0, 10.0));
        assert_eq!(ops[0].non_zero_axes(), [Axis::Y]);
    }

    #[test]
    fn builders_override_fields() {
        let config = CompareConfig::for_preset(OperationPreset::GimbalLock)
            .with_cube_size(1.0)
            .with_methods(vec![Method::Rodrigues])
            .with_euler_order(AxisOrder::EXTRINSIC_XYZ)
            .with_conversion_order(AxisOrder::INTRINSIC_ZYX);

        assert!((config.cube_size - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.methods, [Method::Rodrigues]);
        assert_eq!(config.euler_order, AxisOrder::EXTRINSIC_XYZ);
        assert_eq!(config.conversion_order, AxisOrder::INTRINSIC_ZYX);
        assert_eq!(config.operations, OperationPreset::GimbalLock.operations());
    }
}
