//! Rigid-body rotation of point sets by six interchangeable algorithms.
//!
//! This umbrella crate re-exports the rotation crates under one name.
//!
//! # Quick Start
//!
//! ```
//! use rotation::prelude::*;
//!
//! let cube = Cube::new(3.0);
//! let op = RollPitchYaw::new(10.0, 20.0, 30.0);
//!
//! let rotated = matrix(cube.vertices(), op.zyx());
//! assert_eq!(rotated.len(), 8);
//!
//! let mut session = BenchmarkSession::new();
//! let run = run_comparison(&CompareConfig::default(), &mut session, &mut TracedAllocations);
//! assert_eq!(run.cells.len(), 20);
//! println!("{}", session.summary());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Point sets, the cube, axis orders and orientation conversions
//! - [`engine`] - The rotation algorithms and [`RotationStrategy`](engine::RotationStrategy)
//! - [`bench`] - Benchmark session, allocation tracing and the comparison run
//!
//! # Feature Flags
//!
//! - `serde` - Serialize configuration, operations, point sets and records

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Point sets, the cube, axis orders and orientation conversions.
pub use rotation_types as types;

/// Euler, matrix, quaternion and Rodrigues rotation.
pub use rotation_engine as engine;

/// Time and allocation benchmarking.
pub use rotation_bench as bench;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for rotating and benchmarking.
///
/// # Usage
///
/// ```
/// use rotation::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use rotation_types::{
        Axis, AxisAngle, AxisOrder, Cube, EulerAngles, PointSet, RollPitchYaw, RotationError,
        euler_to_axis_angle, euler_to_quaternion,
    };

    // Algorithms
    pub use rotation_engine::{
        RotationStrategy, euler, euler_manual_all_degree, euler_one_degree, matrix, quaternion,
        rodrigues,
    };

    // Benchmarking
    pub use rotation_bench::{
        BenchmarkSession, CompareConfig, Method, OperationPreset, Summary, TracedAllocations,
        run_comparison,
    };
}

// =============================================================================
// Tests
// =============================================================================
