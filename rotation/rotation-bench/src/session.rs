//! The benchmark session: an explicit, caller-owned accumulation table.

use std::time::Instant;

use hashbrown::HashMap;
use rotation_engine::RotationStrategy;
use rotation_types::PointSet;
use tracing::debug;

use crate::alloc::AllocationProbe;
use crate::record::{BenchmarkRecord, Measurement};
use crate::summary::Summary;

/// Running per-algorithm totals for one benchmarking run.
///
/// Create one at the start of a run, pass it by `&mut` to every measured
/// call, and query it at the end. Records are kept in first-use order, which
/// is also the order [`Summary`] reports them in.
///
/// # Example
///
/// ```
/// use rotation_bench::{BenchmarkSession, TracedAllocations};
/// use rotation_engine::RotationStrategy;
/// use rotation_types::Cube;
///
/// let cube = Cube::new(3.0);
/// let mut session = BenchmarkSession::new();
/// let mut probe = TracedAllocations;
///
/// let strategy = RotationStrategy::Matrix { zyx: [10.0, 20.0, 30.0] };
/// let (rotated, cost) = session.measure_strategy(&strategy, cube.vertices(), &mut probe);
///
/// assert_eq!(rotated.len(), 8);
/// assert!(cost.peak_bytes >= cost.current_bytes);
/// assert_eq!(session.get("matrix").map(|r| r.calls), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BenchmarkSession {
    records: Vec<BenchmarkRecord>,
    index: HashMap<String, usize>,
}

/// Started probe that is stopped when dropped.
struct StopOnDrop<'a, P: AllocationProbe>(&'a mut P);

impl<'a, P: AllocationProbe> StopOnDrop<'a, P> {
    fn start(probe: &'a mut P) -> Self {
        probe.start();
        Self(probe)
    }
}

impl<P: AllocationProbe> Drop for StopOnDrop<'_, P> {
    fn drop(&mut self) {
        self.0.stop();
    }
}

impl BenchmarkSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` once under measurement and charge its cost to `name`.
    ///
    /// Tracing starts before the clock and stops after the snapshot, or
    /// during unwinding if `f` panics. The value `f` returns is handed back
    /// untouched.
    pub fn measure<T>(
        &mut self,
        name: &str,
        probe: &mut impl AllocationProbe,
        f: impl FnOnce() -> T,
    ) -> T {
        self.measure_recorded(name, probe, f).0
    }

    /// Like [`measure`](Self::measure), also returning the measurement that
    /// was folded into `name`'s record.
    pub fn measure_recorded<T>(
        &mut self,
        name: &str,
        probe: &mut impl AllocationProbe,
        f: impl FnOnce() -> T,
    ) -> (T, Measurement) {
        let guard = StopOnDrop::start(probe);
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();
        let snapshot = guard.0.snapshot();
        drop(guard);

        let measurement = Measurement::new(elapsed, snapshot.current, snapshot.peak);
        debug!(
            algorithm = name,
            elapsed_ns = elapsed.as_nanos(),
            current_bytes = snapshot.current,
            peak_bytes = snapshot.peak,
            "measured rotation"
        );
        self.record(name, &measurement);
        (result, measurement)
    }

    /// Measure one rotation, keyed by the strategy's algorithm name.
    pub fn measure_strategy(
        &mut self,
        strategy: &RotationStrategy,
        points: &PointSet,
        probe: &mut impl AllocationProbe,
    ) -> (PointSet, Measurement) {
        self.measure_recorded(strategy.name(), probe, || strategy.apply(points))
    }

    /// Fold an externally taken measurement into `name`'s record, creating
    /// the record on first use.
    pub fn record(&mut self, name: &str, measurement: &Measurement) {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                let slot = self.records.len();
                self.records.push(BenchmarkRecord::new(name));
                self.index.insert(name.to_owned(), slot);
                slot
            }
        };
        self.records[slot].absorb(measurement);
    }

    /// The record for `name`, if it has been measured.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BenchmarkRecord> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    /// All records in first-use order.
    #[must_use]
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of distinct algorithms measured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been measured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Totals table plus the algorithms with the lowest total time and memory.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }
}
