//! Coordinate and coordinate-sequence encoding/decoding.
//!
//! A sequence is written as per-dimension deltas of the quantized values,
//! each delta zig-zag varint encoded. The first coordinate is a delta from
//! the all-zero origin, so encoding it alone equals [`Codec::encode_coord`].

use varint::{encode_int, PolylineReader, VarintError};

use crate::config::Codec;
use crate::error::{CodecError, CodecResult};

impl Codec {
    /// Appends the absolute encoding of a single coordinate to `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DimensionalMismatch`] if `coord` does not have
    /// exactly `dimensions` values. Nothing is written on error.
    pub fn encode_coord(&self, buf: &mut Vec<u8>, coord: &[f64]) -> CodecResult<()> {
        self.check_coord_len(coord.len())?;
        for &value in coord {
            encode_int(buf, self.quantize(value));
        }
        Ok(())
    }

    /// Appends the delta encoding of a coordinate sequence to `buf`.
    ///
    /// Each value is quantized first and the difference between consecutive
    /// quantized values is written, so rounding error never accumulates along
    /// the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DimensionalMismatch`] if any coordinate does not
    /// have exactly `dimensions` values. Nothing is written on error.
    pub fn encode_coords<C: AsRef<[f64]>>(
        &self,
        buf: &mut Vec<u8>,
        coords: &[C],
    ) -> CodecResult<()> {
        for coord in coords {
            self.check_coord_len(coord.as_ref().len())?;
        }
        self.encode_deltas(buf, coords.iter().map(AsRef::as_ref));
        Ok(())
    }

    /// Decodes a single coordinate from `buf`.
    ///
    /// Returns the coordinate and the unconsumed remainder of `buf`.
    ///
    /// # Errors
    ///
    /// Propagates varint errors. A buffer that ends between two values of
    /// the coordinate is reported as [`VarintError::UnterminatedSequence`].
    pub fn decode_coord<'a>(&self, buf: &'a [u8]) -> CodecResult<(Vec<f64>, &'a [u8])> {
        let mut reader = PolylineReader::new(buf);
        let coord = self.read_coord(&mut reader)?;
        Ok((coord, reader.remaining()))
    }

    /// Decodes a delta-coded coordinate sequence spanning all of `buf`.
    ///
    /// Each coordinate after the first is the previous decoded coordinate
    /// plus the scaled delta, summed as `f64`. On success the returned
    /// remainder is always empty. Any error aborts the whole decode and no
    /// coordinates are returned.
    ///
    /// # Errors
    ///
    /// Returns [`VarintError::Empty`] (wrapped) for an empty buffer, since a
    /// zero-length sequence cannot be told apart from missing input, and
    /// propagates any varint error encountered along the way.
    pub fn decode_coords<'a>(&self, buf: &'a [u8]) -> CodecResult<(Vec<Vec<f64>>, &'a [u8])> {
        if buf.is_empty() {
            return Err(CodecError::EMPTY);
        }

        let mut reader = PolylineReader::new(buf);
        let mut coords: Vec<Vec<f64>> = Vec::new();
        while !reader.is_empty() {
            let mut coord = self.read_coord(&mut reader)?;
            if let Some(prev) = coords.last() {
                for (value, &base) in coord.iter_mut().zip(prev) {
                    *value += base;
                }
            }
            coords.push(coord);
        }
        Ok((coords, reader.remaining()))
    }

    /// Writes quantized per-dimension deltas for each coordinate.
    ///
    /// Callers have already checked every coordinate's length.
    pub(crate) fn encode_deltas<'c>(
        &self,
        buf: &mut Vec<u8>,
        coords: impl Iterator<Item = &'c [f64]>,
    ) {
        let mut last = vec![0i64; self.dimensions()];
        for coord in coords {
            for (&value, prev) in coord.iter().zip(last.iter_mut()) {
                let quantized = self.quantize(value);
                encode_int(buf, quantized.wrapping_sub(*prev));
                *prev = quantized;
            }
        }
    }

    /// Reads one coordinate's worth of values, scaled back to reals.
    fn read_coord(&self, reader: &mut PolylineReader<'_>) -> CodecResult<Vec<f64>> {
        let mut values = vec![0i64; self.dimensions()];
        self.accumulate(reader, &mut values)?;
        Ok(values.iter().map(|&v| self.dequantize(v)).collect())
    }

    /// Reads one coordinate's worth of deltas and adds them to `totals`.
    pub(crate) fn accumulate(
        &self,
        reader: &mut PolylineReader<'_>,
        totals: &mut [i64],
    ) -> CodecResult<()> {
        for (idx, total) in totals.iter_mut().enumerate() {
            let delta = match reader.read_int() {
                Ok(delta) => delta,
                Err(VarintError::Empty) if idx > 0 => return Err(CodecError::UNTERMINATED),
                Err(err) => return Err(err.into()),
            };
            *total = total.wrapping_add(delta);
        }
        Ok(())
    }
}

/// Encodes a single coordinate with [`Codec::DEFAULT`].
///
/// # Errors
///
/// Returns [`CodecError::DimensionalMismatch`] unless `coord` has two values.
pub fn encode_coord(coord: &[f64]) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(Codec::DEFAULT.max_encoded_len(1));
    Codec::DEFAULT.encode_coord(&mut buf, coord)?;
    Ok(buf)
}

/// Encodes a coordinate sequence with [`Codec::DEFAULT`].
///
/// # Errors
///
/// Returns [`CodecError::DimensionalMismatch`] unless every coordinate has
/// two values.
pub fn encode_coords<C: AsRef<[f64]>>(coords: &[C]) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(Codec::DEFAULT.max_encoded_len(coords.len()));
    Codec::DEFAULT.encode_coords(&mut buf, coords)?;
    Ok(buf)
}

/// Decodes a single coordinate with [`Codec::DEFAULT`].
pub fn decode_coord(buf: &[u8]) -> CodecResult<(Vec<f64>, &[u8])> {
    Codec::DEFAULT.decode_coord(buf)
}

/// Decodes a coordinate sequence with [`Codec::DEFAULT`].
pub fn decode_coords(buf: &[u8]) -> CodecResult<(Vec<Vec<f64>>, &[u8])> {
    Codec::DEFAULT.decode_coords(buf)
}
