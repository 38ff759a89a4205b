//! Pool configuration shared by the CLI and embedding applications.

use serde::{Deserialize, Serialize};

use crate::ladder::LARGEST_CLASS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Arrays preallocated into each class bag during warm-up. Zero leaves
    /// every pool cold; the first allocation per class then constructs.
    pub warmup_per_class: usize,

    /// Largest class capacity included in warm-up. Classes above it stay
    /// cold, so a small warm-up does not touch the multi-kilobyte classes.
    pub warmup_ceiling: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            warmup_per_class: 0,
            warmup_ceiling: LARGEST_CLASS,
        }
    }
}

impl PoolConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `REPOOL_WARMUP_PER_CLASS`: arrays preallocated per class
    /// - `REPOOL_WARMUP_CEILING`: largest class capacity warmed up
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("REPOOL_WARMUP_PER_CLASS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.warmup_per_class = v;
            }
        }

        if let Ok(s) = std::env::var("REPOOL_WARMUP_CEILING") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.warmup_ceiling = v;
            }
        }

        cfg
    }
}
