//! The comparison run: every configured method on every operation.

use rotation_engine::RotationStrategy;
use rotation_types::{
    Axis, AxisOrder, Cube, EulerAngles, PointSet, RollPitchYaw, euler_to_axis_angle,
    euler_to_quaternion,
};
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alloc::AllocationProbe;
use crate::config::{CompareConfig, Method};
use crate::record::Measurement;
use crate::session::BenchmarkSession;

/// The algorithm and arguments a method uses for one operation.
///
/// - `Euler`: the full Euler algorithm on `[yaw, pitch, roll]` under
///   `euler_order` when more than one angle is non-zero, otherwise a single
///   elemental rotation about the non-zero axis. An all-zero operation
///   rotates about X by 0°.
/// - `EulerManual`, `Matrix`: `[yaw, pitch, roll]`.
/// - `Quaternion`, `Rodrigues`: the operation converted under
///   `conversion_order`.
#[must_use]
pub fn strategy_for(
    method: Method,
    operation: RollPitchYaw,
    euler_order: &AxisOrder,
    conversion_order: &AxisOrder,
) -> RotationStrategy {
    let zyx = operation.zyx();
    match method {
        Method::Euler => {
            let non_zero = operation.non_zero_axes();
            if non_zero.len() > 1 {
                RotationStrategy::Euler {
                    angles: zyx,
                    order: *euler_order,
                }
            } else {
                let axis = non_zero.first().copied().unwrap_or(Axis::X);
                RotationStrategy::EulerOneDegree {
                    angle: operation.angle(axis),
                    label: axis.label(),
                }
            }
        }
        Method::EulerManual => RotationStrategy::EulerManual { zyx },
        Method::Matrix => RotationStrategy::Matrix { zyx },
        Method::Quaternion => {
            let euler = EulerAngles::from_roll_pitch_yaw(operation, *conversion_order);
            RotationStrategy::Quaternion(euler_to_quaternion(&euler))
        }
        Method::Rodrigues => {
            let euler = EulerAngles::from_roll_pitch_yaw(operation, *conversion_order);
            RotationStrategy::Rodrigues(euler_to_axis_angle(&euler))
        }
    }
}

/// One rotated cube in the comparison grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ComparisonCell {
    /// Position of the operation in the configuration.
    pub operation_index: usize,
    /// The operation applied.
    pub operation: RollPitchYaw,
    /// The method compared.
    pub method: Method,
    /// The algorithm the method resolved to.
    pub algorithm: &'static str,
    /// The cube's vertices after rotation.
    pub rotated: PointSet,
    /// Cost of this rotation, as added to the algorithm's session record.
    pub measurement: Measurement,
}

/// Every rotated cube from a comparison, operation-major.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ComparisonRun {
    /// Cells ordered by operation, then by method.
    pub cells: Vec<ComparisonCell>,
}

impl ComparisonRun {
    /// The cell for one operation and method.
    #[must_use]
    pub fn cell(&self, operation_index: usize, method: Method) -> Option<&ComparisonCell> {
        self.cells
            .iter()
            .find(|c| c.operation_index == operation_index && c.method == method)
    }
}

/// Rotate the configured cube by every operation with every method.
///
/// Each rotation goes through `session`, so its time and traced memory are
/// added to the totals of the algorithm it resolved to. Every operation
/// starts from the unrotated cube.
///
/// # Example
///
/// ```
/// use rotation_bench::{BenchmarkSession, CompareConfig, Method, TracedAllocations, run_comparison};
///
/// let config = CompareConfig::default();
/// let mut session = BenchmarkSession::new();
/// let run = run_comparison(&config, &mut session, &mut TracedAllocations);
///
/// assert_eq!(run.cells.len(), 4 * 5);
/// assert!(run.cell(0, Method::Matrix).is_some());
/// assert_eq!(session.get("euler").map(|r| r.calls), Some(4));
/// ```
pub fn run_comparison(
    config: &CompareConfig,
    session: &mut BenchmarkSession,
    probe: &mut impl AllocationProbe,
) -> ComparisonRun {
    let cube = Cube::new(config.cube_size);
    info!(
        operations = config.operations.len(),
        methods = config.methods.len(),
        cube_size = config.cube_size,
        "starting rotation comparison"
    );

    let mut cells = Vec::with_capacity(config.operations.len() * config.methods.len());
    for (operation_index, &operation) in config.operations.iter().enumerate() {
        for &method in &config.methods {
            let strategy = strategy_for(
                method,
                operation,
                &config.euler_order,
                &config.conversion_order,
            );
            let (rotated, measurement) =
                session.measure_strategy(&strategy, cube.vertices(), probe);
            cells.push(ComparisonCell {
                operation_index,
                operation,
                method,
                algorithm: strategy.name(),
                rotated,
                measurement,
            });
        }
    }

    info!(
        cells = cells.len(),
        algorithms = session.len(),
        "finished rotation comparison"
    );
    ComparisonRun { cells }
}
