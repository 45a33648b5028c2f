//! Error definitions.
use thiserror::Error;

/// Crate-wide error type.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A table was requested with fewer than one bucket.
    #[error("bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
    /// A hash function returned an index outside `[0, modulus)`. This is a
    /// contract violation by the caller-supplied hash function.
    #[error("hash function returned {index} for modulus {modulus}")]
    HashOutOfRange { index: usize, modulus: usize },
    /// Resize thresholds or growth factor are unusable.
    #[error("invalid resize policy: {0}")]
    InvalidPolicy(&'static str),
}

/// Result type of fallible table operations.
pub type Result<T> = std::result::Result<T, Error>;
