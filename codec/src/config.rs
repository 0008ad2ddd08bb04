//! Codec configuration: dimensionality and scale.

use varint::MAX_UINT_LEN;

use crate::error::{CodecError, CodecResult};

/// Dimensionality and scale shared by every coordinate operation.
///
/// A `Codec` is immutable once constructed and cheap to copy, so one value can
/// be reused across any number of encode/decode calls and shared between
/// threads. Values map to wire integers as `round(value * scale)`, rounding
/// half away from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCodec"))]
pub struct Codec {
    dimensions: usize,
    scale: f64,
}

impl Codec {
    /// Two dimensions (latitude, longitude) at five decimal places.
    pub const DEFAULT: Self = Self {
        dimensions: 2,
        scale: 1e5,
    };

    /// Creates a codec, validating both parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidDimensions`] if `dimensions` is zero and
    /// [`CodecError::InvalidScale`] if `scale` is not finite and positive.
    pub fn new(dimensions: usize, scale: f64) -> CodecResult<Self> {
        if dimensions == 0 {
            return Err(CodecError::InvalidDimensions { dimensions });
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(CodecError::InvalidScale);
        }
        Ok(Self { dimensions, scale })
    }

    /// Returns the number of values per coordinate.
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns the scale factor.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Upper bound on the encoded size of `count` coordinates, in bytes.
    ///
    /// Useful for pre-sizing output buffers.
    #[must_use]
    pub const fn max_encoded_len(&self, count: usize) -> usize {
        count
            .saturating_mul(self.dimensions)
            .saturating_mul(MAX_UINT_LEN)
    }

    /// Converts a real value to its wire integer.
    ///
    /// Out-of-range values saturate at the `i64` bounds and NaN maps to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn quantize(&self, value: f64) -> i64 {
        (value * self.scale).round() as i64
    }

    /// Converts a wire integer back to a real value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn dequantize(&self, value: i64) -> f64 {
        value as f64 / self.scale
    }

    pub(crate) const fn check_coord_len(&self, len: usize) -> CodecResult<()> {
        if len != self.dimensions {
            return Err(CodecError::DimensionalMismatch {
                len,
                dimensions: self.dimensions,
            });
        }
        Ok(())
    }

    pub(crate) const fn check_flat_len(&self, len: usize) -> CodecResult<()> {
        if len % self.dimensions != 0 {
            return Err(CodecError::DimensionalMismatch {
                len,
                dimensions: self.dimensions,
            });
        }
        Ok(())
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCodec {
    dimensions: usize,
    scale: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCodec> for Codec {
    type Error = CodecError;

    fn try_from(raw: RawCodec) -> CodecResult<Self> {
        Self::new(raw.dimensions, raw.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_codec() {
        let codec = Codec::default();
        assert_eq!(codec, Codec::DEFAULT);
        assert_eq!(codec.dimensions(), 2);
        assert!((codec.scale() - 1e5).abs() < f64::EPSILON);
    }

    #[test]
    fn new_validates_dimensions() {
        assert_eq!(
            Codec::new(0, 1e5),
            Err(CodecError::InvalidDimensions { dimensions: 0 })
        );
        assert!(Codec::new(3, 1e5).is_ok());
    }

    #[test]
    fn new_validates_scale() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(Codec::new(2, scale), Err(CodecError::InvalidScale));
        }
        assert!(Codec::new(2, 0.5).is_ok());
    }

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        let codec = Codec::new(1, 1.0).unwrap();
        assert_eq!(codec.quantize(0.5), 1);
        assert_eq!(codec.quantize(-0.5), -1);
        assert_eq!(codec.quantize(1.49), 1);
        assert_eq!(codec.quantize(-1.49), -1);
        assert_eq!(codec.quantize(2.5), 3);
        assert_eq!(codec.quantize(-2.5), -3);
    }

    #[test]
    fn quantize_saturates() {
        let codec = Codec::DEFAULT;
        assert_eq!(codec.quantize(f64::INFINITY), i64::MAX);
        assert_eq!(codec.quantize(f64::NEG_INFINITY), i64::MIN);
        assert_eq!(codec.quantize(f64::NAN), 0);
    }

    #[test]
    fn dequantize_inverts_quantize() {
        let codec = Codec::DEFAULT;
        assert_eq!(codec.quantize(38.5), 3_850_000);
        assert_eq!(codec.dequantize(3_850_000), 38.5);
        assert_eq!(codec.dequantize(-12_020_000), -120.2);
    }

    #[test]
    fn max_encoded_len_bounds() {
        assert_eq!(Codec::DEFAULT.max_encoded_len(0), 0);
        assert_eq!(Codec::DEFAULT.max_encoded_len(3), 3 * 2 * MAX_UINT_LEN);
        assert_eq!(Codec::DEFAULT.max_encoded_len(usize::MAX), usize::MAX);
    }

    #[test]
    fn length_checks() {
        let codec = Codec::new(3, 10.0).unwrap();
        assert!(codec.check_coord_len(3).is_ok());
        assert_eq!(
            codec.check_coord_len(2),
            Err(CodecError::DimensionalMismatch {
                len: 2,
                dimensions: 3
            })
        );
        assert!(codec.check_flat_len(0).is_ok());
        assert!(codec.check_flat_len(6).is_ok());
        assert!(codec.check_flat_len(7).is_err());
    }

    #[test]
    fn codec_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();
    }
}
