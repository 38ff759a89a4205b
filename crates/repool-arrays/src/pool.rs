//! Per-class recycling bag.

use std::cell::RefCell;

use repool_core::error::Result;

use crate::buf::ArrayBuf;
use crate::recycler::Constructor;

/// Recycling cache for arrays of one fixed backing capacity.
///
/// The bag is an unordered set of currently-unused storage, every entry of
/// length exactly [`capacity`](Self::capacity). Not synchronized: a pool is
/// used by a single thread at a time (see crate docs).
pub struct ClassPool<T> {
    capacity: usize,
    bag: RefCell<Vec<Box<[T]>>>,
}

impl<T> ClassPool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            bag: RefCell::new(Vec::new()),
        }
    }

    /// Nominal capacity of every array in this pool.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Arrays currently available for reuse.
    pub fn available(&self) -> usize {
        self.bag.borrow().len()
    }

    /// Pop a cached array, or construct fresh storage of the nominal
    /// capacity via `construct`. Never blocks; construction failure is the
    /// only error path and propagates.
    pub fn acquire(&self, construct: Constructor<T>) -> Result<ArrayBuf<T>> {
        if let Some(data) = self.bag.borrow_mut().pop() {
            return Ok(ArrayBuf::new(data));
        }
        construct(self.capacity).map(ArrayBuf::new)
    }

    /// Return storage to the bag for a future [`acquire`](Self::acquire).
    ///
    /// The storage length must equal this pool's capacity; anything else
    /// means the caller routed the array to the wrong class. Mismatches
    /// panic in debug builds and are dropped (not pooled) in release builds
    /// so the bag never holds a wrong-sized array.
    pub fn release(&self, data: Box<[T]>) {
        debug_assert_eq!(
            data.len(),
            self.capacity,
            "array released to wrong size class"
        );
        if data.len() == self.capacity {
            self.bag.borrow_mut().push(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recycler::default_storage;

    #[test]
    fn acquire_constructs_when_bag_is_empty() {
        let pool = ClassPool::<u8>::new(16);
        assert_eq!(pool.available(), 0);
        let buf = pool.acquire(default_storage::<u8>).unwrap();
        assert_eq!(buf.backing_len(), 16);
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn release_then_acquire_reuses_storage() {
        let pool = ClassPool::<u8>::new(16);
        let first = pool.acquire(default_storage::<u8>).unwrap();
        let ptr = first.as_ptr();
        pool.release(first.into_inner());
        assert_eq!(pool.available(), 1);

        let second = pool.acquire(default_storage::<u8>).unwrap();
        assert_eq!(second.as_ptr(), ptr);
        assert_eq!(pool.available(), 0);
    }
}
