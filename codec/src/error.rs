//! Error types for coordinate encoding/decoding.

use std::fmt;

use varint::VarintError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while configuring the codec or encoding/decoding
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Varint decoding error.
    Varint(VarintError),

    /// A coordinate or flat array length does not match the dimensionality.
    DimensionalMismatch {
        /// Length of the offending coordinate or flat array.
        len: usize,
        /// Configured dimensionality.
        dimensions: usize,
    },

    /// Dimensionality must be at least one.
    InvalidDimensions { dimensions: usize },

    /// Scale must be finite and strictly positive.
    InvalidScale,
}

impl CodecError {
    /// Shorthand for [`VarintError::Empty`].
    pub const EMPTY: Self = Self::Varint(VarintError::Empty);

    /// Shorthand for [`VarintError::UnterminatedSequence`].
    pub const UNTERMINATED: Self = Self::Varint(VarintError::UnterminatedSequence);
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Varint(e) => write!(f, "varint error: {e}"),
            Self::DimensionalMismatch { len, dimensions } => {
                write!(
                    f,
                    "dimensional mismatch: length {len} does not fit {dimensions} dimensions"
                )
            }
            Self::InvalidDimensions { dimensions } => {
                write!(f, "invalid dimensions {dimensions}, must be at least 1")
            }
            Self::InvalidScale => write!(f, "invalid scale, must be finite and positive"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Varint(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VarintError> for CodecError {
    fn from(err: VarintError) -> Self {
        Self::Varint(err)
    }
}
