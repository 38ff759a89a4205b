//! Size-classed recycling allocator for fixed-capacity arrays.

use repool_core::error::{Error, Result};
use repool_core::ladder::{self, CLASS_COUNT, LADDER};

use crate::buf::ArrayBuf;
use crate::pool::ClassPool;
use crate::tracking::{PoolStats, StatsSnapshot};

/// Constructs fresh backing storage of exactly `len` elements.
///
/// The only per-element-kind hook: supplying one of these is all it takes to
/// pool a new kind. Called by the bucket machinery, not by ordinary users.
pub type Constructor<T> = fn(usize) -> Result<Box<[T]>>;

/// Default constructor: `len` default-initialized elements, with the
/// reservation made fallibly so host-allocator exhaustion surfaces as an
/// error instead of an abort.
pub fn default_storage<T: Default>(len: usize) -> Result<Box<[T]>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| Error::AllocFailed {
        kind: std::any::type_name::<T>(),
        requested: len,
    })?;
    data.extend((0..len).map(|_| T::default()));
    Ok(data.into_boxed_slice())
}

/// Recycling allocator over the fixed ladder of size classes.
///
/// `allocate` rounds a request up to the smallest class that fits and serves
/// it from that class's bag when possible; `recycle` routes storage back by
/// its true backing length. Requests above the largest class bypass the
/// pools entirely: they get exactly the requested length and are never
/// cached, so recycling one is a no-op. Large allocations are assumed rare
/// and not worth the caching overhead.
pub struct ArrayRecycler<T> {
    classes: [ClassPool<T>; CLASS_COUNT],
    construct: Constructor<T>,
    stats: PoolStats,
}

impl<T: Default> ArrayRecycler<T> {
    /// Recycler using default-initialized element construction.
    pub fn new() -> Self {
        Self::with_constructor(default_storage::<T>)
    }
}

impl<T: Default> Default for ArrayRecycler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayRecycler<T> {
    /// Recycler with a custom storage constructor.
    pub fn with_constructor(construct: Constructor<T>) -> Self {
        Self {
            classes: LADDER.map(ClassPool::new),
            construct,
            stats: PoolStats::default(),
        }
    }

    /// Returns an array with backing length >= `capacity`.
    ///
    /// The backing length is the smallest ladder capacity that fits, or
    /// exactly `capacity` for requests above the largest class. The only
    /// failure is host-allocator exhaustion during construction.
    pub fn allocate(&self, capacity: usize) -> Result<ArrayBuf<T>> {
        match ladder::class_for_capacity(capacity) {
            Some(index) => {
                let pool = &self.classes[index];
                let reused = pool.available() > 0;
                let buf = pool.acquire(self.construct)?;
                if reused {
                    self.stats.note_reused();
                } else {
                    self.stats.note_created();
                }
                #[cfg(feature = "tracing")]
                tracing::trace!(capacity, class = pool.capacity(), reused, "array allocate");
                Ok(buf)
            }
            None => {
                let data = (self.construct)(capacity)?;
                self.stats.note_bypassed();
                #[cfg(feature = "tracing")]
                tracing::trace!(capacity, "bypass allocate");
                Ok(ArrayBuf::new(data))
            }
        }
    }

    /// Returns `buf`'s storage to the class matching its backing length.
    ///
    /// Storage whose length is not a ladder capacity — bypass allocations,
    /// or foreign arrays wrapped via `ArrayBuf::from` — is dropped and left
    /// to the host allocator; the pools are untouched. Zero-length arrays
    /// are absorbed without error: they carry no storage worth caching, and
    /// pooling one would let a later `allocate` hand out an undersized
    /// array.
    pub fn recycle(&self, buf: ArrayBuf<T>) {
        let len = buf.backing_len();
        if len == 0 {
            self.stats.note_dropped();
            return;
        }
        match ladder::class_for_len(len) {
            Some(index) => {
                self.classes[index].release(buf.into_inner());
                self.stats.note_recycled();
                #[cfg(feature = "tracing")]
                tracing::trace!(len, "array recycle");
            }
            None => {
                self.stats.note_dropped();
                #[cfg(feature = "tracing")]
                tracing::trace!(len, "recycle dropped (no matching class)");
            }
        }
    }

    /// Preallocate each bag up to `per_class` arrays, for classes with
    /// capacity at most `ceiling`. Stops at the first construction failure.
    pub fn warm_up(&self, per_class: usize, ceiling: usize) -> Result<()> {
        for pool in &self.classes {
            if pool.capacity() > ceiling {
                break;
            }
            while pool.available() < per_class {
                pool.release((self.construct)(pool.capacity())?);
            }
        }
        Ok(())
    }

    /// Arrays currently cached in the class at `index` (ladder order).
    pub fn available_in_class(&self, index: usize) -> usize {
        self.classes[index].available()
    }

    /// Snapshot of every bag's size, smallest class first. Advisory; used by
    /// the self-check and tests to observe pool membership.
    pub fn bag_sizes(&self) -> [usize; CLASS_COUNT] {
        let mut sizes = [0; CLASS_COUNT];
        for (size, pool) in sizes.iter_mut().zip(&self.classes) {
            *size = pool.available();
        }
        sizes
    }

    /// Point-in-time reuse counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
