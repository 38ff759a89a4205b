#![forbid(unsafe_code)]
//! repool-core: ladder geometry, configuration, and error types.
//!
//! The recycling pools themselves live in `repool-arrays`. Only the pure,
//! dependency-light pieces are kept here so any crate can reason about the
//! size-class mapping without pulling in the allocator.

pub mod config;
pub mod error;
pub mod ladder;

pub use config::PoolConfig;
pub use error::{Error, Result};
pub use ladder::{SizeClass, CLASS_COUNT, LADDER, LARGEST_CLASS, SMALLEST_CLASS};
