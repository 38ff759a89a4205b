//! Owned fixed-capacity array handle passed between callers and pools.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// An owned array with a fixed backing capacity.
///
/// The backing length is the true allocated size; a caller that uses only a
/// prefix still recycles by backing length, never by how much it touched.
/// Recycling consumes the handle, so storage cannot be returned twice.
pub struct ArrayBuf<T> {
    data: Box<[T]>,
}

impl<T> ArrayBuf<T> {
    pub(crate) fn new(data: Box<[T]>) -> Self {
        Self { data }
    }

    /// True allocated capacity, independent of how much the caller uses.
    pub fn backing_len(&self) -> usize {
        self.data.len()
    }

    /// Take the raw storage out of the handle.
    pub fn into_inner(self) -> Box<[T]> {
        self.data
    }
}

/// Admits arrays that did not come from a recycler, mirroring the original
/// contract where any array of a matching length may be recycled.
impl<T> From<Box<[T]>> for ArrayBuf<T> {
    fn from(data: Box<[T]>) -> Self {
        Self { data }
    }
}

impl<T> Deref for ArrayBuf<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ArrayBuf<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T> fmt::Debug for ArrayBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuf")
            .field("backing_len", &self.data.len())
            .finish()
    }
}
