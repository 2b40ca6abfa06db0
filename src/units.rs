//! Presentation conversions for route distances and durations.
//!
//! Stored values stay in meters and seconds; these only format them.

const METERS_PER_KM: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.344;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KM
}

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Formats a distance with one decimal, e.g. "3.2 mi" or "5.1 km".
pub fn format_distance(meters: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Imperial => format!("{:.1} mi", meters_to_miles(meters)),
        UnitSystem::Metric => format!("{:.1} km", meters_to_km(meters)),
    }
}

/// Formats a duration rounded to whole minutes, e.g. "45 min" or "1 hr 5 min".
pub fn format_duration(seconds: f64) -> String {
    let total_minutes = if seconds.is_finite() && seconds > 0.0 {
        (seconds / 60.0).round() as u64
    } else {
        0
    };
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, minutes) => format!("{} min", minutes),
        (hours, 0) => format!("{} hr", hours),
        (hours, minutes) => format!("{} hr {} min", hours, minutes),
    }
}
