//! Flat coordinate arrays in caller-managed storage.

use varint::PolylineReader;

use crate::config::Codec;
use crate::error::CodecResult;

impl Codec {
    /// Appends the delta encoding of a flat coordinate array to `buf`.
    ///
    /// `values` holds `count * dimensions` values, dimensions cycling fastest.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DimensionalMismatch`](crate::CodecError::DimensionalMismatch)
    /// if `values.len()` is not a multiple of `dimensions`. Nothing is
    /// written on error.
    pub fn encode_flat_coords(&self, buf: &mut Vec<u8>, values: &[f64]) -> CodecResult<()> {
        self.check_flat_len(values.len())?;
        self.encode_deltas(buf, values.chunks_exact(self.dimensions()));
        Ok(())
    }

    /// Decodes coordinates from `buf`, appending them to `acc`.
    ///
    /// Running totals are seeded from the last coordinate already in `acc`
    /// (the origin if `acc` is empty), so a polyline may be decoded in
    /// several chunks into one array. Totals stay quantized integers, so every
    /// appended value is exactly `round(value * scale) / scale`. An empty
    /// `buf` returns `acc` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DimensionalMismatch`](crate::CodecError::DimensionalMismatch)
    /// if `acc.len()` is not a multiple of `dimensions`, and propagates any
    /// varint error. `acc` is dropped on error.
    pub fn decode_flat_coords<'a>(
        &self,
        mut acc: Vec<f64>,
        buf: &'a [u8],
    ) -> CodecResult<(Vec<f64>, &'a [u8])> {
        let rest = self.decode_flat_coords_into(&mut acc, buf)?;
        Ok((acc, rest))
    }

    /// In-place variant of [`decode_flat_coords`](Self::decode_flat_coords).
    ///
    /// On error `acc` is truncated back to its length at the call.
    pub fn decode_flat_coords_into<'a>(
        &self,
        acc: &mut Vec<f64>,
        buf: &'a [u8],
    ) -> CodecResult<&'a [u8]> {
        self.check_flat_len(acc.len())?;

        let start = acc.len();
        let mut totals: Vec<i64> = match start.checked_sub(self.dimensions()) {
            Some(last) => acc[last..].iter().map(|&v| self.quantize(v)).collect(),
            None => vec![0; self.dimensions()],
        };

        let mut reader = PolylineReader::new(buf);
        while !reader.is_empty() {
            if let Err(err) = self.accumulate(&mut reader, &mut totals) {
                acc.truncate(start);
                return Err(err);
            }
            acc.extend(totals.iter().map(|&v| self.dequantize(v)));
        }
        Ok(reader.remaining())
    }
}

/// Encodes a flat coordinate array with [`Codec::DEFAULT`].
///
/// # Errors
///
/// Returns [`CodecError::DimensionalMismatch`](crate::CodecError::DimensionalMismatch)
/// if `values.len()` is odd.
pub fn encode_flat_coords(values: &[f64]) -> CodecResult<Vec<u8>> {
    let codec = Codec::DEFAULT;
    let mut buf = Vec::with_capacity(codec.max_encoded_len(values.len() / codec.dimensions()));
    codec.encode_flat_coords(&mut buf, values)?;
    Ok(buf)
}

/// Decodes a flat coordinate array with [`Codec::DEFAULT`], appending to `acc`.
pub fn decode_flat_coords(acc: Vec<f64>, buf: &[u8]) -> CodecResult<(Vec<f64>, &[u8])> {
    Codec::DEFAULT.decode_flat_coords(acc, buf)
}
