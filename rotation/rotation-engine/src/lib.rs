//! Interchangeable rotation algorithms for rigid point sets.
//!
//! Six entry points rotate a [`PointSet`](rotation_types::PointSet) about the
//! origin and return a new set, never touching the input:
//!
//! - [`euler_one_degree`] - one elemental rotation about a named axis
//! - [`euler()`] - three Euler angles under an explicit [`AxisOrder`](rotation_types::AxisOrder)
//! - [`euler_manual_all_degree`] - elemental X, Y, Z rotations applied in turn
//! - [`matrix()`] - elemental matrices combined as `Rz · Ry · Rx`
//! - [`quaternion()`] - a quaternion, normalized if needed
//! - [`rodrigues()`] - Rodrigues' axis-angle formula
//!
//! [`RotationStrategy`] wraps each algorithm with its arguments so callers
//! can run them uniformly.
//!
//! # Conventions
//!
//! The algorithms do not share one convention. `euler_manual_all_degree` and
//! `matrix` both take `[z, y, x]` angles; the first applies the elemental
//! rotations one after another, the second multiplies them into one matrix.
//! Both produce the net rotation `Rz · Ry · Rx`. `euler` follows whatever
//! frame and letters its axis order encodes.
//!
//! # Example
//!
//! ```
//! use rotation_engine::{euler_manual_all_degree, matrix};
//! use rotation_types::{Cube, RollPitchYaw};
//!
//! let cube = Cube::new(3.0);
//! let op = RollPitchYaw::new(30.0, 45.0, 0.0);
//!
//! let sequential = euler_manual_all_degree(cube.vertices(), op.zyx());
//! let combined = matrix(cube.vertices(), op.zyx());
//! assert!(sequential.approx_eq(&combined, 1e-9));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod elemental;
mod euler;
mod manual;
mod matrix;
mod quaternion;
mod rodrigues;
mod strategy;

pub use elemental::{elemental, rotation_x, rotation_y, rotation_z};
pub use euler::{euler, euler_matrix, euler_one_degree};
pub use manual::euler_manual_all_degree;
pub use matrix::{composition_matrix, matrix};
pub use quaternion::{QUATERNION_NORM_TOLERANCE, quaternion, quaternion_matrix};
pub use rodrigues::rodrigues;
pub use strategy::RotationStrategy;
