//! Map framing regions computed from territory boundaries or point clusters.

use serde::{Deserialize, Serialize};

use crate::coordinate::{BoundaryRing, Coordinate};

/// Default fraction of the raw extent added as padding on each axis.
const DEFAULT_PADDING_FACTOR: f64 = 0.3;

/// Default smallest span (degrees) a region may have on either axis.
const DEFAULT_MIN_SPAN: f64 = 0.01;

const MAX_LAT_SPAN: f64 = 180.0;
const MAX_LNG_SPAN: f64 = 360.0;

/// Presentation tuning for region framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionOptions {
    /// Extra extent as a fraction of the raw span (0.3 = 30%).
    pub padding_factor: f64,
    /// Floor applied to each span so a single point still yields a region.
    pub min_span: f64,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            padding_factor: DEFAULT_PADDING_FACTOR,
            min_span: DEFAULT_MIN_SPAN,
        }
    }
}

impl RegionOptions {
    pub fn with_padding(padding_factor: f64) -> Self {
        Self {
            padding_factor,
            ..Self::default()
        }
    }

    fn padding_multiplier(&self) -> f64 {
        if self.padding_factor.is_finite() && self.padding_factor > 0.0 {
            1.0 + self.padding_factor
        } else {
            1.0
        }
    }

    fn span_floor(&self) -> f64 {
        if self.min_span.is_finite() && self.min_span > 0.0 {
            self.min_span
        } else {
            0.0
        }
    }
}

/// A center point plus the latitude/longitude extent to show around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub center: Coordinate,
    pub lat_span: f64,
    pub lng_span: f64,
}

impl Region {
    /// Returned when there is nothing to frame: the contiguous United States.
    pub const FALLBACK: Region = Region {
        center: Coordinate::new(39.8283, -98.5795),
        lat_span: 25.0,
        lng_span: 60.0,
    };

    /// Frames a territory boundary.
    pub fn from_ring(ring: &BoundaryRing, options: RegionOptions) -> Self {
        Self::from_points(ring.vertices(), options)
    }

    /// Frames an arbitrary set of points.
    ///
    /// Non-finite points are ignored. With nothing left to frame this returns
    /// [`Region::FALLBACK`].
    pub fn from_points(points: &[Coordinate], options: RegionOptions) -> Self {
        let Some(extent) = Extent::of(points) else {
            return Self::FALLBACK;
        };

        let multiplier = options.padding_multiplier();
        let floor = options.span_floor();

        Self {
            center: extent.center(),
            lat_span: ((extent.max_lat - extent.min_lat) * multiplier)
                .max(floor)
                .min(MAX_LAT_SPAN),
            lng_span: ((extent.max_lng - extent.min_lng) * multiplier)
                .max(floor)
                .min(MAX_LNG_SPAN),
        }
    }

    /// South, west, north and east edges of the region.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half_lat = self.lat_span / 2.0;
        let half_lng = self.lng_span / 2.0;
        (
            self.center.latitude - half_lat,
            self.center.longitude - half_lng,
            self.center.latitude + half_lat,
            self.center.longitude + half_lng,
        )
    }

    /// Whether a point falls within the framed rectangle.
    pub fn contains(&self, point: Coordinate) -> bool {
        let (south, west, north, east) = self.bounds();
        (south..=north).contains(&point.latitude) && (west..=east).contains(&point.longitude)
    }
}

struct Extent {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl Extent {
    fn of(points: &[Coordinate]) -> Option<Self> {
        let mut finite = points.iter().filter(|point| point.is_finite());
        let first = finite.next()?;
        let mut extent = Extent {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };
        for point in finite {
            extent.min_lat = extent.min_lat.min(point.latitude);
            extent.max_lat = extent.max_lat.max(point.latitude);
            extent.min_lng = extent.min_lng.min(point.longitude);
            extent.max_lng = extent.max_lng.max(point.longitude);
        }
        Some(extent)
    }

    fn center(&self) -> Coordinate {
        Coordinate::new(
            self.min_lat / 2.0 + self.max_lat / 2.0,
            self.min_lng / 2.0 + self.max_lng / 2.0,
        )
    }
}
