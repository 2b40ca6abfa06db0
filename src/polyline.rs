//! Polyline representation and the compact polyline wire codec.
//!
//! Directions services ship route geometry as Google's encoded polyline
//! format: each coordinate delta is scaled by 1e5, zig-zag encoded and split
//! into 5-bit groups offset by 63. Decoding happens at the boundary (when a
//! raw route candidate is aggregated); everything downstream works on the
//! decoded [`Polyline`].

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Scale between degrees and the integer units carried on the wire.
const PRECISION: f64 = 1e5;

/// Offset added to every 5-bit group to land in printable ASCII.
const ASCII_OFFSET: u8 = 63;

/// Continuation flag on a 5-bit group.
const CONTINUATION: i64 = 0x20;

const CHUNK_MASK: i64 = 0x1f;

/// Largest shift that still fits a 5-bit group into an i64.
const MAX_SHIFT: u32 = 55;

/// Largest magnitude `encode` writes, in 1e-5 degree units. Any delta between
/// two clamped values still fits the chunks `decode` accepts.
const MAX_SCALED: f64 = (1u64 << 57) as f64;

/// Why an encoded polyline could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("input ends inside a value")]
    Truncated,
    #[error("byte {0:#04x} is outside the polyline alphabet")]
    InvalidByte(u8),
    #[error("value does not fit in 64 bits")]
    Overflow,
    #[error("latitude has no matching longitude")]
    UnpairedLatitude,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolylineError {
    #[error("malformed polyline at byte {position}: {reason}")]
    Malformed {
        position: usize,
        reason: MalformedReason,
    },
}

impl PolylineError {
    fn malformed(position: usize, reason: MalformedReason) -> Self {
        PolylineError::Malformed { position, reason }
    }
}

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        decode(encoded)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Encodes the points back into the wire format.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }

    /// Appends another path, skipping its first point when it repeats our last.
    pub(crate) fn extend_joined(&mut self, other: Polyline) {
        let mut incoming = other.points.into_iter().peekable();
        if let (Some(last), Some(first)) = (self.points.last(), incoming.peek()) {
            if last == first {
                incoming.next();
            }
        }
        self.points.extend(incoming);
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

/// Decodes an encoded polyline into coordinates.
///
/// The whole input must be consumed as complete (latitude, longitude) value
/// pairs; anything else is reported as [`PolylineError::Malformed`] rather
/// than returning a truncated path. An empty string decodes to an empty path.
pub fn decode(encoded: &str) -> Result<Polyline, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::with_capacity(bytes.len() / 4);
    let mut position = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while position < bytes.len() {
        let pair_start = position;
        let delta_lat = read_value(bytes, &mut position)?;
        if position == bytes.len() {
            return Err(PolylineError::malformed(
                pair_start,
                MalformedReason::UnpairedLatitude,
            ));
        }
        let delta_lng = read_value(bytes, &mut position)?;

        lat = lat
            .checked_add(delta_lat)
            .ok_or(PolylineError::malformed(pair_start, MalformedReason::Overflow))?;
        lng = lng
            .checked_add(delta_lng)
            .ok_or(PolylineError::malformed(pair_start, MalformedReason::Overflow))?;

        points.push(Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(Polyline::new(points))
}

/// Encodes coordinates into the polyline wire format.
///
/// Each component is rounded to 1e-5 degrees before the delta is taken, so
/// rounding error does not accumulate along the path. Components beyond
/// roughly ±1.4e12 degrees are clamped to that bound and NaN encodes as 0, so
/// the output always decodes.
pub fn encode(coordinates: &[Coordinate]) -> String {
    let mut encoded = String::with_capacity(coordinates.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for coordinate in coordinates {
        let lat = scale(coordinate.latitude);
        let lng = scale(coordinate.longitude);
        write_value(lat - prev_lat, &mut encoded);
        write_value(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;
    }

    encoded
}

fn scale(degrees: f64) -> i64 {
    // NaN survives the clamp and the cast maps it to zero.
    (degrees * PRECISION).round().clamp(-MAX_SCALED, MAX_SCALED) as i64
}

fn read_value(bytes: &[u8], position: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*position) else {
            return Err(PolylineError::malformed(*position, MalformedReason::Truncated));
        };
        let Some(chunk) = byte
            .checked_sub(ASCII_OFFSET)
            .filter(|chunk| *chunk < 64)
            .map(i64::from)
        else {
            return Err(PolylineError::malformed(
                *position,
                MalformedReason::InvalidByte(byte),
            ));
        };
        if shift > MAX_SHIFT {
            return Err(PolylineError::malformed(*position, MalformedReason::Overflow));
        }

        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *position += 1;

        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    // Zig-zag: bit 0 carries the sign.
    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

fn write_value(value: i64, out: &mut String) {
    let mut remaining = ((value << 1) ^ (value >> 63)) as u64;
    while remaining >= CONTINUATION as u64 {
        let chunk = (CONTINUATION as u64 | (remaining & CHUNK_MASK as u64)) as u8;
        out.push(char::from(chunk + ASCII_OFFSET));
        remaining >>= 5;
    }
    out.push(char::from(remaining as u8 + ASCII_OFFSET));
}
