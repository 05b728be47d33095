//! Application configuration

use application::services::LocationPickerConfig;
use integration_geocoding::GeocodingConfig;
use integration_routing::RoutingConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nominatim geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// OSRM routing configuration
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Location picker tuning
    #[serde(default)]
    pub picker: LocationPickerConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., BOOKING_GEOCODING_BASE_URL)
            .add_source(
                config::Environment::with_prefix("BOOKING")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
