//! Encoded polyline codec
//!
//! Implements the compact polyline string format used by routing providers:
//! signed coordinate deltas, zig-zag sign encoding, 5-bit chunks with a
//! continuation bit (0x20) offset into printable ASCII by 63, at a scale
//! factor of 1e-5. Standalone and independent of any mapping library.

use thiserror::Error;

use crate::value_objects::Coordinate;

/// Errors produced while decoding an encoded polyline
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PolylineError {
    /// The string ended while a chunk still had its continuation bit set
    #[error("polyline ends mid-chunk (continuation bit set on final byte)")]
    Truncated,

    /// A byte below the ASCII offset of 63 appeared in the input
    #[error("invalid polyline character {0:?}")]
    InvalidCharacter(char),

    /// A single value spanned more chunks than a coordinate delta can hold
    #[error("polyline chunk overflows a coordinate delta")]
    Overflow,

    /// Accumulated deltas left the valid coordinate range
    #[error("decoded coordinate out of range: ({latitude}, {longitude})")]
    OutOfRange {
        /// Decoded latitude
        latitude: f64,
        /// Decoded longitude
        longitude: f64,
    },
}

/// Decode an encoded polyline into an ordered coordinate sequence
///
/// Consumes the whole input in one pass. An empty string decodes to an
/// empty path.
///
/// # Errors
///
/// Returns [`PolylineError`] if the input ends mid-chunk, contains a byte
/// outside the polyline alphabet, or accumulates to an out-of-range
/// coordinate.
#[allow(clippy::cast_precision_loss)]
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut path = Vec::new();

    while index < bytes.len() {
        lat += decode_delta(bytes, &mut index)?;
        lng += decode_delta(bytes, &mut index)?;

        let latitude = lat as f64 * 1e-5;
        let longitude = lng as f64 * 1e-5;
        let coordinate = Coordinate::new(latitude, longitude).map_err(|_| {
            PolylineError::OutOfRange {
                latitude,
                longitude,
            }
        })?;
        path.push(coordinate);
    }

    Ok(path)
}

/// Encode an ordered coordinate sequence into the polyline string format
///
/// Inverse of [`decode`] up to the 1e-5 rounding of the format.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode(path: &[Coordinate]) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for coordinate in path {
        let lat = (coordinate.latitude() * 1e5).round() as i64;
        let lng = (coordinate.longitude() * 1e5).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

/// Decode one signed delta, consuming 5-bit chunks until the continuation
/// bit clears
#[allow(clippy::cast_possible_wrap)]
fn decode_delta(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut shift = 0u32;
    let mut accum: u64 = 0;

    loop {
        let byte = *bytes.get(*index).ok_or(PolylineError::Truncated)?;
        *index += 1;

        let Some(chunk) = byte.checked_sub(63) else {
            return Err(PolylineError::InvalidCharacter(byte as char));
        };
        if shift >= 64 {
            return Err(PolylineError::Overflow);
        }
        accum |= u64::from(chunk & 0x1f) << shift;
        shift += 5;

        if chunk & 0x20 == 0 {
            break;
        }
    }

    // Zig-zag inverse: LSB carries the sign
    let accum = accum as i64;
    Ok(if accum & 1 != 0 {
        !(accum >> 1)
    } else {
        accum >> 1
    })
}

/// Encode one signed delta as zig-zagged 5-bit chunks
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn encode_value(value: i64, out: &mut String) {
    let mut remaining = ((value << 1) ^ (value >> 63)) as u64;
    loop {
        let mut chunk = (remaining & 0x1f) as u8;
        remaining >>= 5;
        if remaining > 0 {
            chunk |= 0x20;
        }
        out.push(char::from(chunk + 63));
        if remaining == 0 {
            break;
        }
    }
}
