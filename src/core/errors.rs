use thiserror::Error;

/// Failures that abort a profiling call. Per-record problems are never errors, see `SkipReason`.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Invalid handle, corrupted index or I/O failure while reading the store.
    #[error("failed to access alignment store: {0}")]
    StoreAccess(#[from] rust_htslib::errors::Error),

    /// Region rejected before scanning.
    #[error("invalid region {tid}:{start}-{end}: {reason}")]
    InvalidRegion { tid: u32, start: i64, end: i64, reason: String },

    /// Inconsistent window, target buffer or host-provided option.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ProfileError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        ProfileError::Configuration(msg.into())
    }
}
