//! OSRM HTTP adapter for route alternatives.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::coordinate::Coordinate;
use crate::route::{RawLeg, RawRoute, RawStep};
use crate::traits::{DirectionsError, DirectionsProvider};

/// OSRM reports this when the waypoints cannot be connected.
const NO_ROUTE_CODE: &str = "NoRoute";

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
    /// Ask the service for alternatives besides its first pick.
    pub alternatives: bool,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
            alternatives: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, waypoints: &[Coordinate]) -> String {
        let coords = waypoints
            .iter()
            .map(|point| format!("{:.6},{:.6}", point.longitude, point.latitude))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?alternatives={}&overview=full&steps=true&geometries=polyline",
            self.config.base_url, self.config.profile, coords, self.config.alternatives
        )
    }
}

impl DirectionsProvider for OsrmClient {
    fn routes_for(&self, waypoints: &[Coordinate]) -> Result<Vec<RawRoute>, DirectionsError> {
        if waypoints.len() < 2 {
            return Ok(Vec::new());
        }

        let url = self.route_url(waypoints);
        debug!(waypoints = waypoints.len(), %url, "requesting OSRM routes");

        // OSRM answers NoRoute with a 4xx status but a JSON body, so the body
        // is inspected instead of the status.
        let body = self
            .client
            .get(url)
            .send()?
            .json::<OsrmRouteResponse>()?;

        into_raw_routes(body, waypoints)
    }
}

fn into_raw_routes(
    body: OsrmRouteResponse,
    requested: &[Coordinate],
) -> Result<Vec<RawRoute>, DirectionsError> {
    match body.code.as_str() {
        "Ok" => {}
        NO_ROUTE_CODE => {
            debug!("OSRM found no route between waypoints");
            return Ok(Vec::new());
        }
        code => {
            warn!(code, "OSRM route request rejected");
            return Err(DirectionsError::Service {
                code: code.to_string(),
                message: body.message.unwrap_or_default(),
            });
        }
    }

    let stops: Vec<(Coordinate, String)> = requested
        .iter()
        .enumerate()
        .map(|(i, fallback)| match body.waypoints.get(i) {
            Some(waypoint) => (
                Coordinate::new(waypoint.location[1], waypoint.location[0]),
                waypoint.name.clone(),
            ),
            None => (*fallback, String::new()),
        })
        .collect();

    let routes = body
        .routes
        .into_iter()
        .map(|route| {
            let summary = route
                .legs
                .iter()
                .map(|leg| leg.summary.trim())
                .filter(|summary| !summary.is_empty())
                .collect::<Vec<_>>()
                .join("; ");

            let legs = route
                .legs
                .into_iter()
                .enumerate()
                .map(|(i, leg)| {
                    let (start_coordinate, start_address) = stops
                        .get(i)
                        .cloned()
                        .unwrap_or((requested[0], String::new()));
                    let (end_coordinate, end_address) = stops
                        .get(i + 1)
                        .cloned()
                        .unwrap_or((requested[requested.len() - 1], String::new()));

                    RawLeg {
                        distance_meters: leg.distance,
                        duration_seconds: leg.duration,
                        start_address,
                        end_address,
                        start_coordinate,
                        end_coordinate,
                        steps: leg
                            .steps
                            .into_iter()
                            .map(|step| RawStep {
                                polyline: step.geometry,
                                distance_meters: step.distance,
                                duration_seconds: step.duration,
                                instruction: step.name.filter(|name| !name.is_empty()),
                            })
                            .collect(),
                    }
                })
                .collect();

            RawRoute {
                legs,
                overview_polyline: route.geometry.unwrap_or_default(),
                summary: (!summary.is_empty()).then_some(summary),
            }
        })
        .collect();

    Ok(routes)
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
    #[serde(default)]
    waypoints: Vec<OsrmWaypoint>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    #[serde(default)]
    geometry: Option<String>,
    #[serde(default)]
    legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
struct OsrmLeg {
    distance: f64,
    duration: f64,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
struct OsrmStep {
    #[serde(default)]
    geometry: Option<String>,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OsrmWaypoint {
    #[serde(default)]
    name: String,
    /// OSRM orders this as [longitude, latitude].
    location: [f64; 2],
}
