//! Allocation tracing.
//!
//! [`TrackingAllocator`] wraps the system allocator and, while tracing is
//! switched on, keeps a running count of bytes allocated minus bytes freed
//! together with the highest value that count reached. Tracing is started
//! and stopped around each measured call through an [`AllocationProbe`].
//!
//! A library cannot install a global allocator on its own. A binary, test or
//! bench that wants real numbers declares:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: rotation_bench::TrackingAllocator = rotation_bench::TrackingAllocator;
//! ```
//!
//! Without it the counters never move and every traced size reads as zero.
//!
//! # Accounting
//!
//! Tracing state is per thread. Each [`start_tracing`] opens a new run on
//! the calling thread, and every block carries a small header naming the run
//! it was allocated in. Only blocks allocated on this thread during the
//! current run are counted, and only their frees lower the count, so blocks
//! that existed before the run and allocations made by other threads leave
//! the figures alone.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Run tag of blocks allocated while tracing was off.
const UNTRACED: u64 = 0;

/// Bytes reserved in front of every block for its run tag.
const TAG_SIZE: usize = size_of::<u64>();

static NEXT_RUN: AtomicU64 = AtomicU64::new(UNTRACED + 1);

struct TraceState {
    tracing: Cell<bool>,
    run: Cell<u64>,
    current: Cell<u64>,
    peak: Cell<u64>,
}

thread_local! {
    static TRACE: TraceState = const {
        TraceState {
            tracing: Cell::new(false),
            run: Cell::new(UNTRACED),
            current: Cell::new(0),
            peak: Cell::new(0),
        }
    };
}

/// Bytes traced since the last [`start_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationSnapshot {
    /// Bytes allocated and not yet freed.
    pub current: u64,
    /// Highest value `current` reached.
    pub peak: u64,
}

/// A [`GlobalAlloc`] that counts traced allocations and forwards everything
/// to [`System`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingAllocator;

fn bytes(size: usize) -> u64 {
    u64::try_from(size).unwrap_or(u64::MAX)
}

/// The run this thread is tracing, or [`UNTRACED`].
fn active_run() -> u64 {
    TRACE
        .try_with(|t| if t.tracing.get() { t.run.get() } else { UNTRACED })
        .unwrap_or(UNTRACED)
}

fn record_growth(size: u64) {
    let _ = TRACE.try_with(|t| {
        let now = t.current.get().saturating_add(size);
        t.current.set(now);
        t.peak.set(t.peak.get().max(now));
    });
}

fn record_shrink(size: u64) {
    let _ = TRACE.try_with(|t| t.current.set(t.current.get().saturating_sub(size)));
}

/// The layout requested from [`System`] for `layout`, and the offset of the
/// caller's region inside it.
///
/// The header is at least [`TAG_SIZE`] and a multiple of the alignment, so the
/// caller's region keeps its alignment and the tag right before it is aligned
/// for `u64`.
fn tagged(layout: Layout) -> Option<(Layout, usize)> {
    let align = layout.align().max(TAG_SIZE);
    let size = layout.size().checked_add(align)?;
    Layout::from_size_align(size, align).ok().map(|outer| (outer, align))
}

/// The tag slot of a caller's region.
///
/// # Safety
///
/// `user` must be a region handed out by [`TrackingAllocator`].
#[allow(clippy::cast_ptr_alignment)] // Regions are aligned to at least `TAG_SIZE`
unsafe fn tag_slot(user: *mut u8) -> *mut u64 {
    // SAFETY: the header in front of `user` is at least `TAG_SIZE` bytes.
    unsafe { user.sub(TAG_SIZE).cast::<u64>() }
}

impl TrackingAllocator {
    fn allocate(layout: Layout, zeroed: bool) -> *mut u8 {
        let Some((outer, header)) = tagged(layout) else {
            return ptr::null_mut();
        };
        // SAFETY: `outer` includes the header, so its size is non-zero.
        let base = unsafe {
            if zeroed {
                System.alloc_zeroed(outer)
            } else {
                System.alloc(outer)
            }
        };
        if base.is_null() {
            return base;
        }

        let run = active_run();
        // SAFETY: `header` is less than `outer.size()`, and the tag slot lies
        // inside the header.
        let user = unsafe {
            let user = base.add(header);
            tag_slot(user).write(run);
            user
        };
        if run != UNTRACED {
            record_growth(bytes(layout.size()));
        }
        user
    }
}

// SAFETY: every block comes from `System` with a layout widened by a header
// and is returned to it with that same layout. Bookkeeping only touches
// thread-local cells and an atomic and never allocates.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        Self::allocate(layout, false)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        Self::allocate(layout, true)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // Allocation succeeded for this layout, so widening it succeeds again.
        let Some((outer, header)) = tagged(layout) else {
            return;
        };
        // SAFETY: caller guarantees `ptr` came from this allocator with
        // `layout`, so it sits `header` bytes into a block of `outer`.
        unsafe {
            let run = tag_slot(ptr).read();
            if run != UNTRACED && run == active_run() {
                record_shrink(bytes(layout.size()));
            }
            System.dealloc(ptr.sub(header), outer);
        }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let Some((outer, header)) = tagged(layout) else {
            return ptr::null_mut();
        };
        let Some(new_total) = new_size.checked_add(header) else {
            return ptr::null_mut();
        };
        if Layout::from_size_align(new_total, outer.align()).is_err() {
            return ptr::null_mut();
        }

        // SAFETY: caller guarantees `ptr` came from this allocator with
        // `layout`, so its block starts `header` bytes earlier with `outer`.
        // `new_total` is non-zero and valid for `outer.align()`.
        let base = unsafe { System.realloc(ptr.sub(header), outer, new_total) };
        if base.is_null() {
            return base;
        }

        // SAFETY: the header moved with the block, so the tag slot is intact.
        let (user, slot) = unsafe {
            let user = base.add(header);
            (user, tag_slot(user))
        };
        let run = active_run();
        if run != UNTRACED {
            // SAFETY: `slot` lies inside the live block.
            if unsafe { slot.read() } == run {
                let (old, new) = (bytes(layout.size()), bytes(new_size));
                if new >= old {
                    record_growth(new - old);
                } else {
                    record_shrink(old - new);
                }
            } else {
                // SAFETY: `slot` lies inside the live block.
                unsafe { slot.write(run) };
                record_growth(bytes(new_size));
            }
        }
        user
    }
}

/// Open a new run on this thread with zeroed counters.
pub fn start_tracing() {
    let run = NEXT_RUN.fetch_add(1, Ordering::Relaxed);
    let _ = TRACE.try_with(|t| {
        t.run.set(run);
        t.current.set(0);
        t.peak.set(0);
        t.tracing.set(true);
    });
}

/// Stop tracing on this thread. Counters keep their last values until the
/// next start.
pub fn stop_tracing() {
    let _ = TRACE.try_with(|t| t.tracing.set(false));
}

/// Whether this thread is tracing.
#[must_use]
pub fn is_tracing() -> bool {
    TRACE.try_with(|t| t.tracing.get()).unwrap_or(false)
}

/// Current and peak traced bytes of this thread's latest run.
#[must_use]
pub fn traced_memory() -> AllocationSnapshot {
    TRACE
        .try_with(|t| AllocationSnapshot {
            current: t.current.get(),
            peak: t.peak.get(),
        })
        .unwrap_or_default()
}

/// Source of allocation figures for a measured call.
///
/// The harness calls [`start`](Self::start) before the call,
/// [`snapshot`](Self::snapshot) right after it, then [`stop`](Self::stop).
pub trait AllocationProbe {
    /// Begin tracing with zeroed counters.
    fn start(&mut self);

    /// Bytes traced since `start`.
    fn snapshot(&self) -> AllocationSnapshot;

    /// End tracing.
    fn stop(&mut self);
}

/// Probe backed by [`TrackingAllocator`]'s counters for the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracedAllocations;

impl AllocationProbe for TracedAllocations {
    fn start(&mut self) {
        start_tracing();
    }

    fn snapshot(&self) -> AllocationSnapshot {
        traced_memory()
    }

    fn stop(&mut self) {
        stop_tracing();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keeps_peak_above_current() {
        // The unit-test binary does not install the tracking allocator, so
        // the counters stay at their reset values.
        let mut probe = TracedAllocations;
        probe.start();
        assert!(is_tracing());
        let _ = vec![0_u8; 64];
        let snap = probe.snapshot();
        probe.stop();

        assert!(!is_tracing());
        assert!(snap.peak >= snap.current);
    }

    #[test]
    fn tracing_is_per_thread() {
        start_tracing();
        let other = std::thread::spawn(is_tracing).join().unwrap();
        assert!(is_tracing());
        stop_tracing();

        assert!(!other);
    }

    #[test]
    fn header_preserves_small_alignment() {
        let layout = Layout::from_size_align(24, 1).unwrap();
        let (outer, header) = tagged(layout).unwrap();

        assert_eq!(header, TAG_SIZE);
        assert_eq!(outer.size(), 24 + TAG_SIZE);
        assert_eq!(outer.align(), TAG_SIZE);
    }

    #[test]
    fn header_matches_large_alignment() {
        let layout = Layout::from_size_align(100, 64).unwrap();
        let (outer, header) = tagged(layout).unwrap();

        assert_eq!(header, 64);
        assert_eq!(outer.size(), 164);
        assert_eq!(outer.align(), 64);
    }

    #[test]
    fn header_rejects_overflowing_size() {
        let layout = Layout::from_size_align(usize::MAX / 2 - 3, 4).unwrap();
        assert!(tagged(layout).is_none());
    }
}
