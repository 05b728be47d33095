//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: Nominatim geocoding
//! and OSRM routing adapters, plus configuration loading and telemetry.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::MapViewPort;
use application::services::{LocationPicker, RoutePlanner};
use integration_geocoding::NominatimClient;
use integration_routing::OsrmClient;

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{GeocodingAdapter, RoutingAdapter};
pub use config::AppConfig;
pub use telemetry::{TelemetryConfig, init_tracing};

/// Wire up a [`LocationPicker`] from configuration
///
/// Builds the Nominatim and OSRM clients, wraps them in their adapters and
/// composes the picker over the given map view.
///
/// # Errors
///
/// Returns [`ApplicationError::Configuration`] if either HTTP client cannot
/// be initialized.
pub fn build_location_picker(
    config: &AppConfig,
    map_view: Arc<dyn MapViewPort>,
) -> Result<LocationPicker, ApplicationError> {
    let geocoding_client = NominatimClient::new(config.geocoding.clone())
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
    let routing_client = OsrmClient::new(config.routing.clone())
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    let planner = RoutePlanner::new(Arc::new(RoutingAdapter::new(routing_client)));
    Ok(LocationPicker::new(
        Arc::new(GeocodingAdapter::new(geocoding_client)),
        planner,
        map_view,
        config.picker.clone(),
    ))
}
