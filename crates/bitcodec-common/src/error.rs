//! Error types for bitcodec-common.

use thiserror::Error;

/// Common error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested byte span does not fit inside the buffer.
    #[error("span of {width} bytes at offset {offset} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// A bit string does not fit into a 64-bit register.
    #[error("bit string needs to fit into a 64-bit register but length was {len}")]
    BitStringTooLong { len: usize },

    /// A bit count outside of `0..=64`.
    #[error("bit count {bits} exceeds the 64-bit register width")]
    InvalidBitCount { bits: u32 },

    /// Unrecognized textual byte-order descriptor.
    #[error("unknown byte order: {0:?}")]
    UnknownByteOrder(String),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
