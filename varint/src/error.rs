//! Error types for varint decoding.

use std::fmt;

/// Result type for varint operations.
pub type VarintResult<T> = Result<T, VarintError>;

/// Errors that can occur while decoding a polyline varint.
///
/// Encoding never fails; every `u64` and `i64` has a finite encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarintError {
    /// The input was empty when at least one byte was required.
    Empty,

    /// A byte outside `0x3F..=0x7E` was found inside a varint.
    InvalidByte {
        /// The offending byte.
        byte: u8,
    },

    /// The input ended before a terminal group byte was found.
    UnterminatedSequence,

    /// The decoded value does not fit in 64 bits.
    Overflow,
}

impl fmt::Display for VarintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::InvalidByte { byte } => write!(f, "invalid byte 0x{byte:02x}"),
            Self::UnterminatedSequence => write!(f, "unterminated sequence"),
            Self::Overflow => write!(f, "varint overflows 64 bits"),
        }
    }
}

impl std::error::Error for VarintError {}
