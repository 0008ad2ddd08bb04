//! Conversion and inspection tools for encoded polylines.
//!
//! This crate provides the library half of `polyline-tools`:
//!
//! - Convert JSON coordinate arrays to polylines and back
//! - Break a polyline down into its individual varints
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

pub mod logging;

use std::fmt::Write as _;

use codec::{Codec, CodecResult};
use serde::{Deserialize, Serialize};
use varint::{zigzag_decode, PolylineReader};

/// Coordinates as read from or written to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    /// One array per coordinate: `[[lat, lng], ...]`.
    Nested(Vec<Vec<f64>>),
    /// A single array, dimensions cycling fastest: `[lat, lng, lat, lng, ...]`.
    Flat(Vec<f64>),
}

impl Coordinates {
    /// Returns the number of coordinates for the given codec.
    #[must_use]
    pub fn count(&self, codec: &Codec) -> usize {
        match self {
            Self::Nested(coords) => coords.len(),
            Self::Flat(values) => values.len() / codec.dimensions(),
        }
    }
}

/// Encodes coordinates to a polyline string.
pub fn encode_coordinates(coords: &Coordinates, codec: &Codec) -> CodecResult<String> {
    let mut buf = Vec::with_capacity(codec.max_encoded_len(coords.count(codec)));
    match coords {
        Coordinates::Nested(coords) => codec.encode_coords(&mut buf, coords)?,
        Coordinates::Flat(values) => codec.encode_flat_coords(&mut buf, values)?,
    }
    // The encoder only emits bytes in 0x3F..=0x7E.
    Ok(buf.iter().map(|&b| char::from(b)).collect())
}

/// Decodes a polyline into nested or flat coordinates.
pub fn decode_coordinates(
    polyline: &[u8],
    codec: &Codec,
    flat: bool,
) -> CodecResult<Coordinates> {
    if flat {
        let (values, _) = codec.decode_flat_coords(Vec::new(), polyline)?;
        Ok(Coordinates::Flat(values))
    } else {
        let (coords, _) = codec.decode_coords(polyline)?;
        Ok(Coordinates::Nested(coords))
    }
}

/// Formats coordinates one per line, values separated by commas.
#[must_use]
pub fn format_coordinates_pretty(coords: &Coordinates, codec: &Codec) -> String {
    let rows: Vec<&[f64]> = match coords {
        Coordinates::Nested(coords) => coords.iter().map(Vec::as_slice).collect(),
        Coordinates::Flat(values) => values.chunks(codec.dimensions()).collect(),
    };
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(f64::to_string).collect();
        let _ = writeln!(out, "{}", line.join(", "));
    }
    out
}

/// Per-varint breakdown of a polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub codec: Codec,
    pub total_bytes: usize,
    pub coordinates: usize,
    pub values: Vec<InspectValue>,
}

/// One decoded varint and its place in the coordinate sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectValue {
    /// Byte offset of the first byte of this varint.
    pub offset: usize,
    /// The raw encoded bytes.
    pub encoded: String,
    /// Unsigned value before zig-zag decoding.
    pub zigzag: u64,
    /// Signed delta from the previous coordinate.
    pub delta: i64,
    pub coordinate: usize,
    pub dimension: usize,
    /// Running quantized total for this dimension.
    pub total: i64,
    /// `total / scale`.
    pub value: f64,
}

/// Breaks a polyline down into its varints.
///
/// The polyline must decode as a complete coordinate sequence; errors are the
/// same as [`Codec::decode_coords`].
pub fn inspect_polyline(polyline: &[u8], codec: &Codec) -> CodecResult<InspectReport> {
    let (coords, _) = codec.decode_coords(polyline)?;

    let dimensions = codec.dimensions();
    let mut totals = vec![0i64; dimensions];
    let mut values = Vec::with_capacity(coords.len() * dimensions);
    let mut reader = PolylineReader::new(polyline);
    while !reader.is_empty() {
        let offset = reader.position();
        let zigzag = reader.read_uint()?;
        let delta = zigzag_decode(zigzag);
        let index = values.len();
        let dimension = index % dimensions;
        totals[dimension] = totals[dimension].wrapping_add(delta);
        values.push(InspectValue {
            offset,
            encoded: String::from_utf8_lossy(&polyline[offset..reader.position()]).into_owned(),
            zigzag,
            delta,
            coordinate: index / dimensions,
            dimension,
            total: totals[dimension],
            value: codec.dequantize(totals[dimension]),
        });
    }

    Ok(InspectReport {
        codec: *codec,
        total_bytes: polyline.len(),
        coordinates: coords.len(),
        values,
    })
}

/// Formats an inspection report as an aligned table.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "dimensions: {} scale: {} bytes: {} coordinates: {}",
        report.codec.dimensions(),
        report.codec.scale(),
        report.total_bytes,
        report.coordinates
    );
    let _ = writeln!(
        out,
        "{:>6}  {:<14} {:>20} {:>20}  {:>6} {:>3}  {}",
        "offset", "bytes", "zigzag", "delta", "coord", "dim", "value"
    );
    for v in &report.values {
        let _ = writeln!(
            out,
            "{:>6}  {:<14} {:>20} {:>20}  {:>6} {:>3}  {}",
            v.offset, v.encoded, v.zigzag, v.delta, v.coordinate, v.dimension, v.value
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use codec::{CodecError, VarintError};

    use super::*;

    const POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[test]
    fn encode_nested_json() {
        let coords: Coordinates =
            serde_json::from_str("[[38.5, -120.2], [40.7, -120.95], [43.252, -126.453]]").unwrap();
        assert!(matches!(coords, Coordinates::Nested(_)));
        assert_eq!(encode_coordinates(&coords, &Codec::DEFAULT).unwrap(), POLYLINE);
    }

    #[test]
    fn encode_flat_json() {
        let coords: Coordinates =
            serde_json::from_str("[38.5, -120.2, 40.7, -120.95, 43.252, -126.453]").unwrap();
        assert!(matches!(coords, Coordinates::Flat(_)));
        assert_eq!(coords.count(&Codec::DEFAULT), 3);
        assert_eq!(encode_coordinates(&coords, &Codec::DEFAULT).unwrap(), POLYLINE);
    }

    #[test]
    fn encode_flat_mismatch() {
        let coords = Coordinates::Flat(vec![38.5]);
        let err = encode_coordinates(&coords, &Codec::DEFAULT).unwrap_err();
        assert!(matches!(err, CodecError::DimensionalMismatch { .. }));
    }

    #[test]
    fn decode_nested_and_flat() {
        let nested = decode_coordinates(POLYLINE.as_bytes(), &Codec::DEFAULT, false).unwrap();
        let flat = decode_coordinates(POLYLINE.as_bytes(), &Codec::DEFAULT, true).unwrap();
        assert_eq!(
            serde_json::to_string(&nested).unwrap(),
            "[[38.5,-120.2],[40.7,-120.95],[43.252,-126.453]]"
        );
        assert_eq!(
            serde_json::to_string(&flat).unwrap(),
            "[38.5,-120.2,40.7,-120.95,43.252,-126.453]"
        );
    }

    #[test]
    fn decode_flat_empty_is_empty_array() {
        let flat = decode_coordinates(b"", &Codec::DEFAULT, true).unwrap();
        assert_eq!(flat, Coordinates::Flat(Vec::new()));
        let err = decode_coordinates(b"", &Codec::DEFAULT, false).unwrap_err();
        assert_eq!(err, CodecError::Varint(VarintError::Empty));
    }

    #[test]
    fn pretty_format_one_row_per_coordinate() {
        let flat = decode_coordinates(POLYLINE.as_bytes(), &Codec::DEFAULT, true).unwrap();
        let text = format_coordinates_pretty(&flat, &Codec::DEFAULT);
        assert_eq!(text, "38.5, -120.2\n40.7, -120.95\n43.252, -126.453\n");
    }

    #[test]
    fn inspect_reports_every_varint() {
        let report = inspect_polyline(POLYLINE.as_bytes(), &Codec::DEFAULT).unwrap();
        assert_eq!(report.total_bytes, POLYLINE.len());
        assert_eq!(report.coordinates, 3);
        assert_eq!(report.values.len(), 6);

        let first = &report.values[0];
        assert_eq!(first.offset, 0);
        assert_eq!(first.encoded, "_p~iF");
        assert_eq!(first.delta, 3_850_000);
        assert_eq!((first.coordinate, first.dimension), (0, 0));

        let last = &report.values[5];
        assert_eq!(last.offset, 22);
        assert_eq!(last.encoded, "vxq`@");
        assert_eq!(last.delta, -550_300);
        assert_eq!(last.total, -12_645_300);
        assert_eq!((last.coordinate, last.dimension), (2, 1));
        assert_eq!(last.value, -126.453);
    }

    #[test]
    fn inspect_rejects_invalid_polyline() {
        let err = inspect_polyline(b"_p~iF>", &Codec::DEFAULT).unwrap_err();
        assert_eq!(err, CodecError::Varint(VarintError::InvalidByte { byte: b'>' }));
    }

    #[test]
    fn inspect_pretty_has_header_and_rows() {
        let report = inspect_polyline(POLYLINE.as_bytes(), &Codec::DEFAULT).unwrap();
        let text = format_inspect_pretty(&report);
        assert!(text.starts_with("dimensions: 2 scale: 100000 bytes: 27 coordinates: 3"));
        assert_eq!(text.lines().count(), 2 + 6);
        assert!(text.contains("vxq`@"));
    }

    #[test]
    fn inspect_report_serializes() {
        let report = inspect_polyline(b"??", &Codec::DEFAULT).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["codec"]["dimensions"], 2);
        assert_eq!(json["values"][1]["dimension"], 1);
    }
}
