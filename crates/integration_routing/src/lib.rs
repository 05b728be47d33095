//! OSRM routing integration
//!
//! Client for the [OSRM](https://project-osrm.org) route service. Requests
//! driving routes with full polyline-encoded geometry and decodes them into
//! coordinate paths.

pub mod client;
mod models;

pub use client::{OsrmClient, RoutingClient, RoutingConfig, RoutingError};
pub use models::DrivingRoute;
