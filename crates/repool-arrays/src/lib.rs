#![forbid(unsafe_code)]
//! repool-arrays: size-classed recycling pools for fixed-capacity arrays.
//!
//! Allocation requests are rounded up to a fixed ladder of power-of-two
//! capacities (see `repool_core::ladder`); each class keeps a bag of
//! previously-constructed arrays for reuse, so a steady-state workload pays
//! no host-allocator cost on either `allocate` or `recycle`.
//!
//! Pools are thread-confined by design: the bags use interior mutability
//! without locks, so a recycler is `!Sync` and every acquire/release pair
//! stays on one thread. The `registry` module hands each thread its own set
//! of recyclers for the common element kinds.
//!
//! ```
//! use repool_arrays::ArrayRecycler;
//!
//! let ints = ArrayRecycler::<i32>::new();
//! let buf = ints.allocate(1000).unwrap(); // backing length 1024
//! assert!(buf.backing_len() >= 1000);
//! ints.recycle(buf); // storage parked for the next allocate(..=1024)
//! ```

pub mod buf;
pub mod pool;
pub mod recycler;
pub mod registry;
pub mod tracking;

pub use buf::ArrayBuf;
pub use pool::ClassPool;
pub use recycler::{default_storage, ArrayRecycler, Constructor};
pub use tracking::{PoolStats, StatsSnapshot};
