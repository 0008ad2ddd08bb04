//! Coordinate encoding/decoding for the Encoded Polyline Algorithm Format.
//!
//! This crate builds on the `varint` crate to encode sequences of
//! N-dimensional coordinates as printable ASCII: each value is scaled and
//! rounded to an integer, consecutive coordinates are delta coded per
//! dimension, and every delta is written as a zig-zag varint.
//!
//! # Features
//!
//! - Single coordinate and coordinate sequence encoding/decoding
//! - Flat coordinate arrays decoded into caller-managed storage
//! - Configurable dimensionality and scale via [`Codec`]
//! - Optional `serde` support for [`Codec`]
//!
//! # Design Principles
//!
//! - **Stateless** - Only the immutable [`Codec`] is shared between calls.
//! - **Chainable** - Decoders return the unconsumed remainder of their input.
//! - **All or nothing** - A failed decode returns only the error.
//!
//! # Example
//!
//! ```
//! let coords = [[38.5, -120.2], [40.7, -120.95], [43.252, -126.453]];
//! let encoded = codec::encode_coords(&coords).unwrap();
//! assert_eq!(encoded, b"_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//!
//! let (decoded, rest) = codec::decode_coords(&encoded).unwrap();
//! assert_eq!(decoded, coords);
//! assert!(rest.is_empty());
//! ```

mod config;
mod coords;
mod error;
mod flat;

pub use config::Codec;
pub use coords::{decode_coord, decode_coords, encode_coord, encode_coords};
pub use error::{CodecError, CodecResult};
pub use flat::{decode_flat_coords, encode_flat_coords};
pub use varint::{decode_int, decode_uint, encode_int, encode_uint, VarintError};
