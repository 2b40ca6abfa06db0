//! canvass-core geospatial core
//!
//! Territory containment, map framing, route alternatives and the visit
//! queue used by the field-canvassing app.

pub mod coordinate;
pub mod traits;
pub mod polyline;
pub mod containment;
pub mod region;
pub mod route;
pub mod navigator;
pub mod units;
pub mod osrm;
pub mod haversine;

pub use coordinate::{BoundaryRing, Coordinate, Located};
pub use navigator::{Direction, NavigationError, NavigatorPhase, VisitQueueNavigator, VisitQueueState};
pub use polyline::{Polyline, PolylineError};
pub use region::{Region, RegionOptions};
pub use route::{RouteAlternative, RouteError, RouteLeg, RouteSet};
