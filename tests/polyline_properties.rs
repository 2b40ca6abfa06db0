//! Property checks for the polyline codec.

use canvass_core::Coordinate;
use canvass_core::polyline::{PolylineError, decode, encode};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn path() -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(
        (-9_000_000_i32..=9_000_000_i32, -18_000_000_i32..=18_000_000_i32),
        0..64,
    )
    .prop_map(|units| {
        units
            .into_iter()
            .map(|(lat, lng)| Coordinate::new(f64::from(lat) * 1e-5, f64::from(lng) * 1e-5))
            .collect()
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn test_round_trip_within_precision(points in path()) {
        let decoded = decode(&encode(&points)).expect("encoded path decodes");
        prop_assert_eq!(decoded.len(), points.len());
        for (actual, expected) in decoded.points().iter().zip(&points) {
            prop_assert!((actual.latitude - expected.latitude).abs() <= 1e-5);
            prop_assert!((actual.longitude - expected.longitude).abs() <= 1e-5);
        }
    }

    #[test]
    fn test_strict_prefix_is_malformed_or_leading_points(points in path()) {
        let encoded = encode(&points);
        let full = decode(&encoded).expect("encoded path decodes");

        for cut in 0..encoded.len() {
            match decode(&encoded[..cut]) {
                Ok(partial) => {
                    prop_assert!(partial.len() <= full.len());
                    prop_assert_eq!(partial.points(), &full.points()[..partial.len()]);
                }
                Err(PolylineError::Malformed { position, .. }) => {
                    prop_assert!(position <= cut);
                }
            }
        }
    }
}
