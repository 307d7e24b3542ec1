use thiserror::Error;

/// Errors reported by the digest engine and the algorithm registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The descriptor cannot drive an engine, e.g. its IV does not match its state size.
    #[error("invalid descriptor for {name}: {reason}")]
    InvalidDescriptor {
        /// Name carried by the rejected descriptor.
        name: &'static str,
        /// What is inconsistent.
        reason: &'static str,
    },
    /// The message would exceed 2^64 - 1 bits.
    #[error("length overflow: already wrote {written} bytes, trying to write {requested} bytes")]
    LengthOverflow {
        /// Bytes accepted so far.
        written: u64,
        /// Size of the rejected write.
        requested: usize,
    },
    /// No algorithm is registered under the given name.
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
    /// The output buffer does not have the digest size.
    #[error("bad output size: want {expected}, got {actual}")]
    OutputSize {
        /// Digest size of the algorithm.
        expected: usize,
        /// Size of the buffer that was passed in.
        actual: usize,
    },
}

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
