//! Varint primitives for the Encoded Polyline Algorithm Format.
//!
//! Each integer is written as one or more printable ASCII bytes. A byte carries
//! five value bits, least significant group first, offset by 63 for the final
//! group and by 95 for every group that is followed by another one. Signed
//! integers are zig-zag mapped before encoding so small magnitudes stay short.
//!
//! This crate provides free functions ([`encode_uint`], [`decode_uint`],
//! [`encode_int`], [`decode_int`]) and the [`PolylineWriter`] /
//! [`PolylineReader`] pair built on top of them.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Decoding never reads past the input and never panics.
//! - **No domain knowledge** - This crate knows nothing about coordinates or scales.
//! - **Explicit errors** - All failures return structured errors.
//!
//! # Example
//!
//! ```
//! use varint::{PolylineReader, PolylineWriter};
//!
//! let mut writer = PolylineWriter::new();
//! writer.write_int(3_850_000);
//! writer.write_uint(174);
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, b"_p~iFmD");
//!
//! let mut reader = PolylineReader::new(&bytes);
//! assert_eq!(reader.read_int().unwrap(), 3_850_000);
//! assert_eq!(reader.read_uint().unwrap(), 174);
//! assert!(reader.is_empty());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{VarintError, VarintResult};
pub use reader::{decode_int, decode_uint, PolylineReader};
pub use writer::{encode_int, encode_uint, PolylineWriter};

/// Offset added to a terminal group (`'?'`).
pub const TERMINAL_OFFSET: u8 = 63;

/// Offset added to a continuation group (`'_'`).
pub const CONTINUATION_OFFSET: u8 = 95;

/// Largest byte of the encoding alphabet (`'~'`).
pub const MAX_BYTE: u8 = 126;

/// Value bits carried by each encoded byte.
pub const GROUP_BITS: u32 = 5;

/// Maximum encoded length of a `u64` or `i64`.
pub const MAX_UINT_LEN: usize = 13;

const GROUP_MASK: u64 = (1 << GROUP_BITS) - 1;

/// Maps a signed integer onto the unsigned range.
///
/// Non-negative `i` maps to `2i`, negative `i` to `!(2i)`. Computed on the
/// unsigned bit pattern so `i64::MIN` maps to `u64::MAX` without overflow.
#[must_use]
pub const fn zigzag_encode(value: i64) -> u64 {
    let shifted = (value as u64) << 1;
    if value < 0 {
        !shifted
    } else {
        shifted
    }
}

/// Inverse of [`zigzag_encode`].
#[must_use]
pub const fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
