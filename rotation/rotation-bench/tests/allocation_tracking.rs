//! Allocation figures with the tracking allocator installed.
//!
//! Tracing is per thread, so these tests run alongside each other.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use rotation_bench::{
    BenchmarkSession, CompareConfig, Method, TracedAllocations, TrackingAllocator, run_comparison,
};
use rotation_engine::RotationStrategy;
use rotation_types::{Cube, Point3};

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

const POINT_BYTES: u64 = std::mem::size_of::<Point3<f64>>() as u64;

#[test]
fn tracked_rotations_report_their_allocations() {
    let cube = Cube::new(3.0);
    let cube_bytes = POINT_BYTES * cube.vertices().len() as u64;
    let zyx = [10.0, 20.0, 30.0];
    let mut session = BenchmarkSession::new();
    let mut probe = TracedAllocations;

    // One output set is still alive when the snapshot is taken.
    let strategy = RotationStrategy::Matrix { zyx };
    let (rotated, cost) = session.measure_strategy(&strategy, cube.vertices(), &mut probe);
    let matrix = session.get("matrix").unwrap();
    assert_eq!(rotated.len(), 8);
    assert_eq!(cost.current_bytes, matrix.total_memory_bytes);
    assert!(matrix.total_memory_bytes >= cube_bytes);
    assert!(matrix.peak_memory_bytes >= cube_bytes);

    // Three intermediate sets stay alive until the last pass finishes.
    let strategy = RotationStrategy::EulerManual { zyx };
    session.measure_strategy(&strategy, cube.vertices(), &mut probe);
    let manual = session.get("euler_manual_all_degree").unwrap();
    assert!(manual.peak_memory_bytes >= 3 * cube_bytes);
    assert!(manual.peak_memory_bytes >= manual.total_memory_bytes);

    // A work-free closure allocates nothing.
    session.measure("noop", &mut probe, || ());
    assert_eq!(session.get("noop").unwrap().total_memory_bytes, 0);

    assert!(!rotation_bench::is_tracing());
}

#[test]
fn comparison_cells_carry_their_allocations() {
    let cube_bytes = POINT_BYTES * 8;
    let config =
        CompareConfig::default().with_methods(vec![Method::Quaternion, Method::Rodrigues]);
    let mut session = BenchmarkSession::new();
    let run = run_comparison(&config, &mut session, &mut TracedAllocations);

    for name in ["quaternion", "rodrigues"] {
        let record = session.get(name).unwrap();
        assert_eq!(record.calls, 4);
        assert!(record.total_memory_bytes >= 4 * cube_bytes);
        assert!(record.total_memory_mb() > 0.0);
    }
    assert!(run.cells.iter().all(|c| c.measurement.current_bytes >= cube_bytes));
    assert!(!rotation_bench::is_tracing());
}

#[test]
fn freeing_an_older_block_does_not_hide_new_allocations() {
    let mut session = BenchmarkSession::new();
    let older = vec![0_u8; 1_000_000];

    let kept = session.measure("release_then_allocate", &mut TracedAllocations, move || {
        drop(older);
        vec![1_u8; 100_000]
    });
    let record = session.get("release_then_allocate").unwrap();

    assert_eq!(kept.len(), 100_000);
    assert!(record.total_memory_bytes >= 100_000);
    assert!(record.peak_memory_bytes >= 100_000);
}

#[test]
fn growing_an_older_block_counts_its_new_size() {
    let mut session = BenchmarkSession::new();
    let mut older: Vec<u8> = Vec::with_capacity(1_000);

    let grown = session.measure("grow", &mut TracedAllocations, move || {
        older.reserve_exact(10_000);
        older
    });
    let record = session.get("grow").unwrap();

    assert!(grown.capacity() >= 10_000);
    assert!(record.total_memory_bytes >= 10_000);
}

#[test]
fn sessions_on_separate_threads_see_only_their_own_allocations() {
    let barrier = Arc::new(Barrier::new(2));

    let quiet = {
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            let mut session = BenchmarkSession::new();
            session.measure("idle", &mut TracedAllocations, || {
                barrier.wait();
                thread::sleep(Duration::from_millis(50));
            });
            session.get("idle").cloned().unwrap()
        })
    };
    let noisy = thread::spawn(move || {
        let mut session = BenchmarkSession::new();
        barrier.wait();
        let buffer = session.measure("allocate", &mut TracedAllocations, || vec![0_u8; 500_000]);
        (buffer.len(), session.get("allocate").cloned().unwrap())
    });

    let idle = quiet.join().unwrap();
    let (len, busy) = noisy.join().unwrap();

    assert_eq!(len, 500_000);
    assert!(busy.peak_memory_bytes >= 500_000);
    assert_eq!(idle.total_memory_bytes, 0);
    assert_eq!(idle.peak_memory_bytes, 0);
}
