//! Core types for rigid point-set rotation.
//!
//! This crate provides the foundational types shared by the rotation engine
//! and the benchmark harness:
//!
//! - [`PointSet`] - An ordered set of points, rotated as a whole
//! - [`Cube`] - The origin-centered test cube and its edge list
//! - [`Axis`], [`AxisOrder`], [`Frame`] - Euler axis sequences
//! - [`RollPitchYaw`], [`EulerAngles`], [`AxisAngle`] - Orientation inputs
//! - [`euler_to_quaternion`], [`euler_to_axis_angle`] - Conversions
//!
//! # Conventions
//!
//! - Right-handed coordinates, rotations counter-clockwise when looking down
//!   the positive axis toward the origin.
//! - Caller-facing angles are in degrees; axis-angle angles are in radians.
//! - Quaternions are [`nalgebra::Quaternion`]; use [`quat_from_xyzw`] and
//!   [`quat_to_xyzw`] for the scalar-last component order.
//! - Rotation is always about the origin. Nothing here translates points.
//!
//! # Example
//!
//! ```
//! use rotation_types::{AxisOrder, Cube, EulerAngles, RollPitchYaw, euler_to_axis_angle};
//!
//! let cube = Cube::new(3.0);
//! let op = RollPitchYaw::new(10.0, 20.0, 30.0);
//! let aa = euler_to_axis_angle(&EulerAngles::from_roll_pitch_yaw(op, AxisOrder::EXTRINSIC_XYZ));
//!
//! assert_eq!(cube.vertices().len(), 8);
//! assert!(aa.angle > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod axis;
mod cube;
mod error;
mod geometry;
mod orientation;
mod points;

pub use axis::{Axis, AxisOrder, Frame};
pub use cube::Cube;
pub use error::{RotationError, RotationResult};
pub use geometry::{NORMALIZE_EPSILON, is_rotation_matrix, normalize_or_zero};
pub use orientation::{
    AXIS_ANGLE_EPSILON, AxisAngle, EulerAngles, RollPitchYaw, euler_to_axis_angle,
    euler_to_quaternion, quat_from_xyzw, quat_to_xyzw,
};
pub use points::PointSet;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Quaternion, UnitQuaternion, Vector3};
