//! Varint reader with bounded, panic-free decoding.

use crate::error::{VarintError, VarintResult};
use crate::{zigzag_decode, CONTINUATION_OFFSET, GROUP_BITS, MAX_BYTE, TERMINAL_OFFSET};

const LAST_TERMINAL: u8 = CONTINUATION_OFFSET - 1;

/// Decodes a single unsigned integer from `buf`.
///
/// Returns the value and the unconsumed remainder of `buf`. Non-canonical
/// encodings with leading zero groups are accepted as long as no bit beyond
/// bit 63 is set.
///
/// # Errors
///
/// - [`VarintError::Empty`] if `buf` is empty.
/// - [`VarintError::InvalidByte`] if a byte outside `0x3F..=0x7E` is found.
/// - [`VarintError::UnterminatedSequence`] if `buf` ends before a terminal group.
/// - [`VarintError::Overflow`] if the value does not fit in a `u64`.
pub fn decode_uint(buf: &[u8]) -> VarintResult<(u64, &[u8])> {
    if buf.is_empty() {
        return Err(VarintError::Empty);
    }

    let mut value = 0u64;
    let mut shift = 0u32;
    for (idx, &byte) in buf.iter().enumerate() {
        let (group, terminal) = match byte {
            TERMINAL_OFFSET..=LAST_TERMINAL => (byte - TERMINAL_OFFSET, true),
            CONTINUATION_OFFSET..=MAX_BYTE => (byte - CONTINUATION_OFFSET, false),
            _ => return Err(VarintError::InvalidByte { byte }),
        };
        value |= place_group(group, shift)?;
        if terminal {
            return Ok((value, &buf[idx + 1..]));
        }
        shift += GROUP_BITS;
    }
    Err(VarintError::UnterminatedSequence)
}

/// Decodes a single zig-zag mapped signed integer from `buf`.
///
/// Errors from the unsigned decode are propagated unchanged.
pub fn decode_int(buf: &[u8]) -> VarintResult<(i64, &[u8])> {
    let (value, rest) = decode_uint(buf)?;
    Ok((zigzag_decode(value), rest))
}

/// Shifts a five-bit group into place, rejecting any bit past bit 63.
fn place_group(group: u8, shift: u32) -> VarintResult<u64> {
    if shift >= u64::BITS {
        return Err(VarintError::Overflow);
    }
    let group = u64::from(group);
    let placed = group << shift;
    if placed >> shift != group {
        return Err(VarintError::Overflow);
    }
    Ok(placed)
}

/// A cursor over polyline bytes.
///
/// Each read either consumes exactly one complete varint or fails and
/// leaves the position unchanged. The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct PolylineReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PolylineReader<'a> {
    /// Creates a new `PolylineReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn bytes_remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes_remaining() == 0
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unconsumed bytes.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Reads an unsigned integer.
    pub fn read_uint(&mut self) -> VarintResult<u64> {
        let (value, rest) = decode_uint(self.remaining())?;
        self.pos = self.data.len() - rest.len();
        Ok(value)
    }

    /// Reads a zig-zag mapped signed integer.
    pub fn read_int(&mut self) -> VarintResult<i64> {
        self.read_uint().map(zigzag_decode)
    }
}
