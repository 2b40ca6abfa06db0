//! Coordinate and boundary types shared by the geometry modules.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees (WGS84, no datum conversion).
///
/// Values are not validated on construction; the geometry functions accept
/// out-of-range input and fall back to documented values instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}

/// Anything with a position on the map.
///
/// Visit addresses supplied by the data layer implement this so they can be
/// filtered against a territory boundary without copying them into plain
/// coordinates first.
pub trait Located {
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Located> Located for &T {
    fn coordinate(&self) -> Coordinate {
        (*self).coordinate()
    }
}

/// A territory boundary: an ordered ring of vertices, implicitly closed.
///
/// The first and last vertex need not be equal. Rings with fewer than three
/// vertices are representable but enclose nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryRing {
    vertices: Vec<Coordinate>,
}

impl BoundaryRing {
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the ring has enough vertices to enclose an area.
    pub fn is_polygon(&self) -> bool {
        self.vertices.len() >= 3
    }
}

impl From<Vec<Coordinate>> for BoundaryRing {
    fn from(vertices: Vec<Coordinate>) -> Self {
        Self::new(vertices)
    }
}

impl From<Vec<(f64, f64)>> for BoundaryRing {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Coordinate::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_conversion() {
        let coordinate = Coordinate::from((36.1147, -115.1728));
        assert_eq!(coordinate.latitude, 36.1147);
        assert_eq!(coordinate.longitude, -115.1728);
        let back: (f64, f64) = coordinate.into();
        assert_eq!(back, (36.1147, -115.1728));
    }

    #[test]
    fn test_is_valid() {
        assert!(Coordinate::new(90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_ring_from_tuples() {
        let ring = BoundaryRing::from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        assert_eq!(ring.len(), 3);
        assert!(ring.is_polygon());
        assert_eq!(ring.vertices()[2], Coordinate::new(1.0, 1.0));
    }

    #[test]
    fn test_accepts_short_keys() {
        let coordinate: Coordinate = serde_json::from_str(r#"{"lat": 36.5, "lng": -115.25}"#).unwrap();
        assert_eq!(coordinate, Coordinate::new(36.5, -115.25));
    }

    #[test]
    fn test_ring_serializes_as_array() {
        let ring = BoundaryRing::from(vec![(1.0, 2.0)]);
        let json = serde_json::to_string(&ring).unwrap();
        assert_eq!(json, r#"[{"latitude":1.0,"longitude":2.0}]"#);
    }
}
