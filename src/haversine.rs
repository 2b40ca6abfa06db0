//! Straight-line directions provider (fallback when no routing service is reachable).
//!
//! Uses great-circle distance and an assumed speed to estimate each leg.
//! Less accurate than a road network (ignores streets) but always available.

use crate::coordinate::Coordinate;
use crate::polyline::encode;
use crate::route::{RawLeg, RawRoute};
use crate::traits::{DirectionsError, DirectionsProvider};

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

const SUMMARY: &str = "Straight line";

/// Haversine-based directions provider.
///
/// Always yields a single candidate connecting the waypoints in order.
#[derive(Debug, Clone)]
pub struct StraightLineDirections {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for StraightLineDirections {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl StraightLineDirections {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Great-circle distance between two points in kilometers.
    pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
        let lat1_rad = from.latitude.to_radians();
        let lat2_rad = to.latitude.to_radians();
        let delta_lat = (to.latitude - from.latitude).to_radians();
        let delta_lng = (to.longitude - from.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Convert distance in km to travel time in seconds.
    fn km_to_seconds(&self, km: f64) -> f64 {
        if self.speed_kmh <= 0.0 {
            return 0.0;
        }
        let hours = km / self.speed_kmh;
        (hours * 3600.0).round()
    }
}

impl DirectionsProvider for StraightLineDirections {
    fn routes_for(&self, waypoints: &[Coordinate]) -> Result<Vec<RawRoute>, DirectionsError> {
        if waypoints.len() < 2 {
            return Ok(Vec::new());
        }

        let legs = waypoints
            .windows(2)
            .map(|pair| {
                let km = Self::haversine_km(pair[0], pair[1]);
                RawLeg {
                    distance_meters: (km * 1000.0).round(),
                    duration_seconds: self.km_to_seconds(km),
                    start_address: String::new(),
                    end_address: String::new(),
                    start_coordinate: pair[0],
                    end_coordinate: pair[1],
                    steps: Vec::new(),
                }
            })
            .collect();

        Ok(vec![RawRoute {
            legs,
            overview_polyline: encode(waypoints),
            summary: Some(SUMMARY.to_string()),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_walk() -> Vec<Coordinate> {
        vec![
            Coordinate::new(36.1147, -115.1728),
            Coordinate::new(36.1126, -115.1767),
            Coordinate::new(36.1024, -115.1746),
        ]
    }

    #[test]
    fn test_leg_duration_follows_configured_speed() {
        let provider = StraightLineDirections::new(30.0);
        let routes = provider.routes_for(&strip_walk()).unwrap();
        for leg in &routes[0].legs {
            let expected = (leg.distance_meters / 1000.0 / 30.0 * 3600.0).round();
            assert!((leg.duration_seconds - expected).abs() <= 1.0);
            assert!(leg.distance_meters > 0.0);
        }

        let stalled = StraightLineDirections::new(0.0).routes_for(&strip_walk()).unwrap();
        assert!(stalled[0].legs.iter().all(|leg| leg.duration_seconds == 0.0));
    }

    #[test]
    fn test_repeated_waypoint_yields_empty_leg() {
        let stop = Coordinate::new(36.1147, -115.1728);
        let routes = StraightLineDirections::default().routes_for(&[stop, stop]).unwrap();
        assert_eq!(routes[0].legs[0].distance_meters, 0.0);
        assert_eq!(routes[0].legs[0].duration_seconds, 0.0);
    }

    #[test]
    fn test_detour_is_never_shorter_than_direct() {
        let walk = strip_walk();
        let provider = StraightLineDirections::default();
        let via = provider.routes_for(&walk).unwrap();
        let direct = provider.routes_for(&[walk[0], walk[2]]).unwrap();
        let via_meters: f64 = via[0].legs.iter().map(|leg| leg.distance_meters).sum();
        // Each leg rounds to the meter.
        assert!(via_meters + 1.0 >= direct[0].legs[0].distance_meters);
    }

    #[test]
    fn test_overview_decodes_to_waypoints_and_aggregates() {
        let walk = strip_walk();
        let raw = StraightLineDirections::default().routes_for(&walk).unwrap();
        let leg_meters: f64 = raw[0].legs.iter().map(|leg| leg.distance_meters).sum();

        let alternatives = crate::route::aggregate(raw).unwrap();
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].summary_label(), SUMMARY);
        assert_eq!(alternatives[0].total_distance_meters(), leg_meters);
        assert_eq!(alternatives[0].overview_path().len(), walk.len());
        for (decoded, original) in alternatives[0].overview_path().points().iter().zip(&walk) {
            assert!((decoded.latitude - original.latitude).abs() < 1e-5);
            assert!((decoded.longitude - original.longitude).abs() < 1e-5);
        }
    }

    #[test]
    fn test_one_leg_per_waypoint_pair() {
        let waypoints = vec![
            Coordinate::new(36.1, -115.1),
            Coordinate::new(36.2, -115.2),
            Coordinate::new(36.3, -115.3),
        ];
        let routes = StraightLineDirections::default().routes_for(&waypoints).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].legs.len(), 2);
        assert_eq!(routes[0].legs[1].start_coordinate, waypoints[1]);
        assert_eq!(routes[0].summary.as_deref(), Some(SUMMARY));
    }

    #[test]
    fn test_too_few_waypoints() {
        let provider = StraightLineDirections::default();
        assert!(provider.routes_for(&[]).unwrap().is_empty());
        assert!(provider.routes_for(&[Coordinate::new(36.1, -115.1)]).unwrap().is_empty());
    }
}
