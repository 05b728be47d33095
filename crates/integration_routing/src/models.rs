//! OSRM API response types and the decoded route

use domain::value_objects::Coordinate;
use serde::Deserialize;

/// Top-level OSRM route service response
#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    /// "Ok" on success, an error code otherwise
    pub code: String,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
    /// Human-readable error detail, present on failures
    #[serde(default)]
    pub message: Option<String>,
}

/// One route alternative as returned by OSRM
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Polyline-encoded geometry
    pub geometry: String,
    /// Driving distance in meters
    pub distance: f64,
    /// Driving duration in seconds
    pub duration: f64,
}

/// A driving route with decoded geometry
#[derive(Debug, Clone, PartialEq)]
pub struct DrivingRoute {
    /// Ordered path from pickup to dropoff
    pub path: Vec<Coordinate>,
    /// Driving distance in meters
    pub distance_m: f64,
    /// Driving duration in seconds
    pub duration_s: f64,
}
