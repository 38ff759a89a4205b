//! Thread-confined recyclers for the common element kinds.
//!
//! Each thread that touches the registry lazily builds its own set of
//! recyclers exactly once and keeps them for the thread's lifetime, so
//! acquire/release pairs never cross threads and no locking is needed.
//! Sharing one recycler across threads requires caller-supplied
//! synchronization instead of this registry; that is a documented
//! precondition, not something the pools enforce.
//!
//! ```
//! use repool_arrays::registry;
//!
//! let buf = registry::INTS.with(|r| r.allocate(1024)).unwrap();
//! registry::INTS.with(|r| r.recycle(buf));
//! ```

use std::any::Any;

use crate::recycler::ArrayRecycler;

/// Element slot for the dynamically-typed object entry. `None` is the
/// default-initialized state, as a null entry is in a reference array.
pub type ObjSlot = Option<Box<dyn Any>>;

thread_local! {
    /// `bool` arrays.
    pub static BOOLS: ArrayRecycler<bool> = ArrayRecycler::new();

    /// Byte arrays.
    pub static BYTES: ArrayRecycler<u8> = ArrayRecycler::new();

    /// `char` arrays.
    pub static CHARS: ArrayRecycler<char> = ArrayRecycler::new();

    /// `i16` arrays.
    pub static SHORTS: ArrayRecycler<i16> = ArrayRecycler::new();

    /// `i32` arrays.
    pub static INTS: ArrayRecycler<i32> = ArrayRecycler::new();

    /// `i64` arrays.
    pub static LONGS: ArrayRecycler<i64> = ArrayRecycler::new();

    /// `f32` arrays.
    pub static FLOATS: ArrayRecycler<f32> = ArrayRecycler::new();

    /// `f64` arrays.
    pub static DOUBLES: ArrayRecycler<f64> = ArrayRecycler::new();

    /// Arrays of type-erased object slots, for reference-element workloads.
    pub static OBJECTS: ArrayRecycler<ObjSlot> = ArrayRecycler::new();
}
