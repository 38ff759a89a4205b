//! Cheap reuse counters.
//!
//! Recyclers are thread-confined like their pools, so plain `Cell`s are
//! enough; no atomics on the hot path. Downstream can export snapshots to
//! whatever metrics pipeline it runs.

use std::cell::Cell;

use serde::Serialize;

#[derive(Default)]
pub struct PoolStats {
    reused: Cell<u64>,
    created: Cell<u64>,
    recycled: Cell<u64>,
    dropped: Cell<u64>,
    bypassed: Cell<u64>,
}

impl PoolStats {
    pub(crate) fn note_reused(&self) {
        self.reused.set(self.reused.get() + 1);
    }

    pub(crate) fn note_created(&self) {
        self.created.set(self.created.get() + 1);
    }

    pub(crate) fn note_recycled(&self) {
        self.recycled.set(self.recycled.get() + 1);
    }

    pub(crate) fn note_dropped(&self) {
        self.dropped.set(self.dropped.get() + 1);
    }

    pub(crate) fn note_bypassed(&self) {
        self.bypassed.set(self.bypassed.get() + 1);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reused: self.reused.get(),
            created: self.created.get(),
            recycled: self.recycled.get(),
            dropped: self.dropped.get(),
            bypassed: self.bypassed.get(),
        }
    }
}

/// Point-in-time view of one recycler's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Allocations served from a class bag.
    pub reused: u64,
    /// Allocations that constructed fresh storage for a class.
    pub created: u64,
    /// Arrays returned to a bag.
    pub recycled: u64,
    /// Recycle calls that dropped the storage (zero-length or no matching class).
    pub dropped: u64,
    /// Allocations above the largest class, served without pooling.
    pub bypassed: u64,
}
