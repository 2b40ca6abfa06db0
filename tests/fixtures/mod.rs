//! Test fixtures for canvass-core.
//!
//! Provides realistic test data including:
//! - Real Las Vegas / Henderson locations (from OpenStreetMap)
//! - A territory boundary around the Strip
//! - Directions payloads in the service's JSON shape

pub mod las_vegas_territory;

pub use las_vegas_territory::*;
