//! Per-call measurements and per-algorithm running totals.

// Byte counts stay far below 2^52 in practice
#![allow(clippy::cast_precision_loss)]

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bytes per megabyte, decimal.
pub const BYTES_PER_MB: f64 = 1e6;

/// Cost of one measured call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Wall-clock time of the call.
    pub elapsed: Duration,
    /// Traced bytes still allocated when the call returned.
    pub current_bytes: u64,
    /// Highest traced byte count during the call.
    pub peak_bytes: u64,
}

impl Measurement {
    /// Create a measurement.
    #[must_use]
    pub const fn new(elapsed: Duration, current_bytes: u64, peak_bytes: u64) -> Self {
        Self {
            elapsed,
            current_bytes,
            peak_bytes,
        }
    }
}

/// Accumulated cost of every call to one algorithm.
///
/// Time and current bytes are summed across calls. Peak bytes is the largest
/// single-call peak, never a sum.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkRecord {
    /// Algorithm name.
    pub name: String,
    /// Number of calls absorbed.
    pub calls: u64,
    /// Sum of elapsed time.
    pub total_time: Duration,
    /// Sum of traced bytes left allocated by each call.
    pub total_memory_bytes: u64,
    /// Largest single-call peak.
    pub peak_memory_bytes: u64,
}

impl BenchmarkRecord {
    /// Create an empty record for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: 0,
            total_time: Duration::ZERO,
            total_memory_bytes: 0,
            peak_memory_bytes: 0,
        }
    }

    /// Fold one measurement into the totals.
    pub fn absorb(&mut self, m: &Measurement) {
        self.calls += 1;
        self.total_time = self.total_time.saturating_add(m.elapsed);
        self.total_memory_bytes = self.total_memory_bytes.saturating_add(m.current_bytes);
        self.peak_memory_bytes = self.peak_memory_bytes.max(m.peak_bytes);
    }

    /// Total time in seconds.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.total_time.as_secs_f64()
    }

    /// Total memory in megabytes.
    #[must_use]
    pub fn total_memory_mb(&self) -> f64 {
        self.total_memory_bytes as f64 / BYTES_PER_MB
    }

    /// Peak memory in megabytes.
    #[must_use]
    pub fn peak_memory_mb(&self) -> f64 {
        self.peak_memory_bytes as f64 / BYTES_PER_MB
    }
}

impl std::fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} calls, {:.6}s total, {:.6}MB total, {:.6}MB peak",
            self.name,
            self.calls,
            self.total_seconds(),
            self.total_memory_mb(),
            self.peak_memory_mb()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn absorb_sums_time_and_memory() {
        let mut r = BenchmarkRecord::new("matrix");
        r.absorb(&Measurement::new(Duration::from_micros(5), 200, 400));
        r.absorb(&Measurement::new(Duration::from_micros(7), 300, 350));

        assert_eq!(r.calls, 2);
        assert_eq!(r.total_time, Duration::from_micros(12));
        assert_eq!(r.total_memory_bytes, 500);
    }

    #[test]
    fn peak_is_max_not_sum() {
        let mut r = BenchmarkRecord::new("quaternion");
        for peak in [100, 900, 400] {
            r.absorb(&Measurement::new(Duration::ZERO, 0, peak));
        }
        assert_eq!(r.peak_memory_bytes, 900);
    }

    #[test]
    fn unit_conversions() {
        let mut r = BenchmarkRecord::new("rodrigues");
        r.absorb(&Measurement::new(Duration::from_millis(1500), 2_500_000, 3_000_000));

        assert_relative_eq!(r.total_seconds(), 1.5);
        assert_relative_eq!(r.total_memory_mb(), 2.5);
        assert_relative_eq!(r.peak_memory_mb(), 3.0);
    }

    #[test]
    fn display_uses_six_decimals() {
        let mut r = BenchmarkRecord::new("euler");
        r.absorb(&Measurement::new(Duration::from_micros(1), 192, 192));
        assert_eq!(
            r.to_string(),
            "euler: 1 calls, 0.000001s total, 0.000192MB total, 0.000192MB peak"
        );
    }
}
