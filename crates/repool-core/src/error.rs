use thiserror::Error;

/// Canonical result for the repool crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The host allocator could not provide backing storage. Propagated to
    /// the caller of `allocate`; never retried at this layer.
    #[error("allocation of {requested} `{kind}` elements failed")]
    AllocFailed {
        kind: &'static str,
        requested: usize,
    },

    /// A pool property did not hold during a self-check run.
    #[error("invariant failed: {0}")]
    Invariant(String),
}
