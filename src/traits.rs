//! Core seams between the canvassing core and the surrounding application.
//!
//! These are intentionally minimal. The app implements them for its own
//! record models and directions backends.

use std::fmt::Debug;
use std::hash::Hash;

use crate::coordinate::Coordinate;
use crate::route::RawRoute;

/// Unique identifier for visit records.
pub trait Id: Clone + Eq + Hash + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug {}

/// A visit record being edited in the queue.
///
/// The navigator never looks at business fields (status, notes, contact
/// details); it only needs identity and the edit-state predicates.
pub trait VisitRecord {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Whether the record differs from its last saved baseline.
    fn is_dirty(&self) -> bool;

    /// Whether the pending edits are acceptable to persist.
    fn is_valid(&self) -> bool {
        true
    }
}

/// Produces raw route candidates for an ordered list of waypoints.
///
/// The first waypoint is the origin, the last the destination, anything in
/// between an intermediate stop. Candidates come back in the service's own
/// preference order.
pub trait DirectionsProvider {
    fn routes_for(&self, waypoints: &[Coordinate]) -> Result<Vec<RawRoute>, DirectionsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    #[error("directions request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("directions service returned {code}: {message}")]
    Service { code: String, message: String },
}
