//! Timing and allocation benchmarks for the rotation algorithms.
//!
//! A [`BenchmarkSession`] wraps each rotation call, measures its wall-clock
//! time and the bytes it allocates, and keeps running totals per algorithm.
//! [`run_comparison`] drives every configured [`Method`] over every operation
//! of a [`CompareConfig`] and hands back the rotated cubes.
//!
//! - [`TrackingAllocator`], [`AllocationProbe`] - Allocation tracing
//! - [`Measurement`], [`BenchmarkRecord`] - Per-call cost and totals
//! - [`BenchmarkSession`], [`Summary`] - Accumulation and reporting
//! - [`CompareConfig`], [`run_comparison`] - The comparison run
//!
//! # Memory numbers
//!
//! Allocation figures come from [`TrackingAllocator`]. Only a binary, test or
//! bench that installs it as `#[global_allocator]` sees non-zero memory.
//!
//! # Example
//!
//! ```
//! use rotation_bench::{BenchmarkSession, CompareConfig, TracedAllocations, run_comparison};
//!
//! let mut session = BenchmarkSession::new();
//! run_comparison(&CompareConfig::default(), &mut session, &mut TracedAllocations);
//!
//! let summary = session.summary();
//! assert!(summary.fastest.is_some());
//! println!("{summary}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod alloc;
mod compare;
mod config;
mod record;
mod session;
mod summary;

pub use alloc::{
    AllocationProbe, AllocationSnapshot, TracedAllocations, TrackingAllocator, is_tracing,
    start_tracing, stop_tracing, traced_memory,
};
pub use compare::{ComparisonCell, ComparisonRun, run_comparison, strategy_for};
pub use config::{CompareConfig, Method, OperationPreset, PRESET_ANGLES};
pub use record::{BYTES_PER_MB, BenchmarkRecord, Measurement};
pub use session::BenchmarkSession;
pub use summary::{Summary, SummaryRow};
