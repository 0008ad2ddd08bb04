//! Varint writer for the Encoded Polyline Algorithm Format.

use crate::{zigzag_encode, CONTINUATION_OFFSET, GROUP_BITS, GROUP_MASK, TERMINAL_OFFSET};

/// Appends the encoding of a single unsigned integer to `buf`.
///
/// Groups are emitted least significant first. Every group except the last
/// is offset by 95 (continuation), the last by 63 (terminal), so the encoder
/// never emits a leading zero continuation group.
pub fn encode_uint(buf: &mut Vec<u8>, mut value: u64) {
    while value > GROUP_MASK {
        // Masked to five bits, the cast cannot truncate.
        buf.push((value & GROUP_MASK) as u8 + CONTINUATION_OFFSET);
        value >>= GROUP_BITS;
    }
    buf.push(value as u8 + TERMINAL_OFFSET);
}

/// Appends the zig-zag encoding of a single signed integer to `buf`.
pub fn encode_int(buf: &mut Vec<u8>, value: i64) {
    encode_uint(buf, zigzag_encode(value));
}

/// An append-only writer producing polyline bytes.
///
/// All writes are infallible. Call [`finish`](Self::finish) to take the
/// encoded buffer.
#[derive(Debug, Default, Clone)]
pub struct PolylineWriter {
    bytes: Vec<u8>,
}

impl PolylineWriter {
    /// Creates a new empty `PolylineWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `PolylineWriter` with pre-allocated capacity in bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes an unsigned integer.
    pub fn write_uint(&mut self, value: u64) {
        encode_uint(&mut self.bytes, value);
    }

    /// Writes a zig-zag mapped signed integer.
    pub fn write_int(&mut self, value: i64) {
        encode_int(&mut self.bytes, value);
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}
