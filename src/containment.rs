//! Point-in-territory tests.
//!
//! Uses the even-odd ray-casting test with longitude as x and latitude as y.
//! Two limitations are inherent and deliberate:
//!
//! - A point lying exactly on an edge may be reported either way; ray
//!   casting does not resolve boundary-exact cases consistently.
//! - Rings crossing the antimeridian are not unwrapped, so such territories
//!   give wrong answers near ±180° longitude.

use rayon::prelude::*;

use crate::coordinate::{BoundaryRing, Coordinate, Located};

/// Whether `point` lies inside `ring`.
///
/// Rings with fewer than three vertices enclose nothing and always return
/// `false`. Non-finite input never panics; it simply fails every crossing
/// comparison.
pub fn contains(ring: &BoundaryRing, point: Coordinate) -> bool {
    let vertices = ring.vertices();
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if crosses(a, b, point) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Does a ray cast from `point` towards +longitude cross the edge `a`-`b`?
fn crosses(a: Coordinate, b: Coordinate, point: Coordinate) -> bool {
    if (a.latitude > point.latitude) == (b.latitude > point.latitude) {
        return false;
    }
    // The straddle check above guarantees a.latitude != b.latitude.
    let t = (point.latitude - a.latitude) / (b.latitude - a.latitude);
    let edge_longitude = a.longitude + t * (b.longitude - a.longitude);
    point.longitude < edge_longitude
}

/// Keeps the items located inside `ring`, preserving their order.
///
/// Each point is tested against the ring's edges once, so the cost is
/// O(points × vertices). Points are tested in parallel.
pub fn filter_inside<'a, P>(ring: &BoundaryRing, points: &'a [P]) -> Vec<&'a P>
where
    P: Located + Sync,
{
    if !ring.is_polygon() {
        return Vec::new();
    }

    points
        .par_iter()
        .filter(|point| contains(ring, point.coordinate()))
        .collect()
}
