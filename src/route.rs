//! Route alternatives built from raw directions candidates.
//!
//! A directions call returns one or more candidates, each already split into
//! legs (one per consecutive waypoint pair) with an encoded overview geometry.
//! Aggregation decodes the geometry, totals the legs and labels each
//! candidate, keeping the service's order: index 0 is whatever the service
//! considered best.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::polyline::{Polyline, PolylineError};
use crate::traits::{DirectionsError, DirectionsProvider};

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("no routes available")]
    NoRoutesAvailable,
    #[error(transparent)]
    MalformedPolyline(#[from] PolylineError),
    #[error(transparent)]
    Directions(#[from] DirectionsError),
}

// ============================================================================
// Raw input (already-parsed directions JSON)
// ============================================================================

/// One route candidate as returned by a directions service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoute {
    pub legs: Vec<RawLeg>,
    #[serde(default)]
    pub overview_polyline: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl RawRoute {
    /// Parses a JSON array of route candidates.
    pub fn from_json_array(json: &str) -> Result<Vec<RawRoute>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeg {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
    pub start_coordinate: Coordinate,
    pub end_coordinate: Coordinate,
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStep {
    #[serde(default)]
    pub polyline: Option<String>,
    #[serde(default)]
    pub distance_meters: f64,
    #[serde(default)]
    pub duration_seconds: f64,
    #[serde(default)]
    pub instruction: Option<String>,
}

// ============================================================================
// Aggregated output
// ============================================================================

/// A single leg between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub start_address: String,
    pub end_address: String,
    pub start_coordinate: Coordinate,
    pub end_coordinate: Coordinate,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Joined per-step geometry, when the service supplied any.
    pub step_polyline: Option<Polyline>,
}

impl RouteLeg {
    fn from_raw(raw: RawLeg) -> Result<Self, PolylineError> {
        let mut step_polyline: Option<Polyline> = None;
        for encoded in raw.steps.iter().filter_map(|step| step.polyline.as_deref()) {
            let decoded = Polyline::decode(encoded)?;
            step_polyline
                .get_or_insert_with(Polyline::default)
                .extend_joined(decoded);
        }

        Ok(Self {
            start_address: raw.start_address,
            end_address: raw.end_address,
            start_coordinate: raw.start_coordinate,
            end_coordinate: raw.end_coordinate,
            distance_meters: raw.distance_meters,
            duration_seconds: raw.duration_seconds,
            step_polyline,
        })
    }
}

/// One aggregated route candidate.
///
/// Totals are always the sum over legs; there is no way to set them
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAlternative {
    rank: usize,
    summary_label: String,
    legs: Vec<RouteLeg>,
    total_distance_meters: f64,
    total_duration_seconds: f64,
    overview_path: Polyline,
}

impl RouteAlternative {
    fn from_raw(index: usize, raw: RawRoute) -> Result<Self, PolylineError> {
        let overview_path = Polyline::decode(&raw.overview_polyline)?;
        let legs = raw
            .legs
            .into_iter()
            .map(RouteLeg::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        let total_distance_meters = legs.iter().map(|leg| leg.distance_meters).sum();
        let total_duration_seconds = legs.iter().map(|leg| leg.duration_seconds).sum();

        let summary_label = raw
            .summary
            .as_deref()
            .map(str::trim)
            .filter(|summary| !summary.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Route {}", index + 1));

        Ok(Self {
            rank: index + 1,
            summary_label,
            legs,
            total_distance_meters,
            total_duration_seconds,
            overview_path,
        })
    }

    /// 1-based position in the service's order.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn summary_label(&self) -> &str {
        &self.summary_label
    }

    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.total_distance_meters
    }

    pub fn total_duration_seconds(&self) -> f64 {
        self.total_duration_seconds
    }

    pub fn overview_path(&self) -> &Polyline {
        &self.overview_path
    }
}

/// Aggregates raw candidates into alternatives, preserving input order.
///
/// An empty candidate list is an error so callers can tell "nothing found"
/// apart from "not loaded yet".
pub fn aggregate(raw_candidates: Vec<RawRoute>) -> Result<Vec<RouteAlternative>, RouteError> {
    if raw_candidates.is_empty() {
        return Err(RouteError::NoRoutesAvailable);
    }

    let candidate_count = raw_candidates.len();
    let alternatives = raw_candidates
        .into_iter()
        .enumerate()
        .map(|(index, raw)| RouteAlternative::from_raw(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(candidates = candidate_count, "aggregated route alternatives");
    Ok(alternatives)
}

/// Picks an alternative by index, clamping stale indices to the last one.
///
/// Returns `None` only for an empty slice.
pub fn select_alternative(
    alternatives: &[RouteAlternative],
    index: usize,
) -> Option<&RouteAlternative> {
    let last = alternatives.len().checked_sub(1)?;
    alternatives.get(index.min(last))
}

/// Fetches candidates from a provider and aggregates them.
pub fn plan_routes<P>(provider: &P, waypoints: &[Coordinate]) -> Result<RouteSet, RouteError>
where
    P: DirectionsProvider + ?Sized,
{
    let raw = provider.routes_for(waypoints)?;
    RouteSet::from_raw(raw)
}

// ============================================================================
// Selection cursor
// ============================================================================

/// A non-empty list of alternatives with a movable selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSet {
    alternatives: Vec<RouteAlternative>,
    selected: usize,
}

impl RouteSet {
    /// Aggregates candidates and selects the service's first pick.
    pub fn from_raw(raw_candidates: Vec<RawRoute>) -> Result<Self, RouteError> {
        let alternatives = aggregate(raw_candidates)?;
        Ok(Self {
            alternatives,
            selected: 0,
        })
    }

    pub fn alternatives(&self) -> &[RouteAlternative] {
        &self.alternatives
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &RouteAlternative {
        &self.alternatives[self.selected]
    }

    /// Moves the selection, clamping out-of-range indices to the last one.
    pub fn select(&mut self, index: usize) -> &RouteAlternative {
        self.selected = index.min(self.alternatives.len() - 1);
        debug!(selected = self.selected, requested = index, "route alternative selected");
        self.selected()
    }

    /// Index of the quickest alternative; ties go to the earlier one.
    pub fn fastest_index(&self) -> usize {
        first_min_by(&self.alternatives, RouteAlternative::total_duration_seconds)
    }

    /// Index of the shortest alternative; ties go to the earlier one.
    pub fn shortest_index(&self) -> usize {
        first_min_by(&self.alternatives, RouteAlternative::total_distance_meters)
    }
}

fn first_min_by(alternatives: &[RouteAlternative], key: fn(&RouteAlternative) -> f64) -> usize {
    let mut best = 0;
    for (index, alternative) in alternatives.iter().enumerate().skip(1) {
        if key(alternative) < key(&alternatives[best]) {
            best = index;
        }
    }
    best
}
