//! Nominatim HTTP client
//!
//! Forward and reverse geocoding against a Nominatim server. Nominatim's
//! usage policy requires an identifying User-Agent, so the client always
//! sends one.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::{Coordinate, LocationCandidate};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::NominatimPlace;

/// Street-level detail for reverse lookups
const REVERSE_ZOOM: u8 = 18;

/// Geocoding client errors
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Geocoding service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded (Nominatim allows at most 1 request/second)
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Nominatim service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Nominatim base URL (default: <https://nominatim.openstreetmap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of search candidates (default: 5)
    #[serde(default = "default_max_results")]
    pub max_results: u8,

    /// Accept-Language value for localized display names
    #[serde(default = "default_language")]
    pub language: String,

    /// Identifying User-Agent, required by the Nominatim usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_max_results() -> u8 {
    5
}

fn default_language() -> String {
    "en-US,en".to_string()
}

fn default_user_agent() -> String {
    "limo-booking/0.1".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_results: default_max_results(),
            language: default_language(),
            user_agent: default_user_agent(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Search for locations matching a free-form query
    ///
    /// Returns up to the configured number of candidates, best match first.
    /// An unknown query yields an empty list, not an error.
    async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, GeocodingError>;

    /// Look up the display name for a coordinate
    ///
    /// `Ok(None)` when the server knows no address at that point.
    async fn reverse(&self, coordinate: Coordinate) -> Result<Option<String>, GeocodingError>;

    /// Check if the geocoding service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Nominatim HTTP client implementation
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: GeocodingConfig,
}

impl NominatimClient {
    /// Create a new Nominatim client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GeocodingError> {
        Self::new(GeocodingConfig::default())
    }

    fn map_send_error(e: &reqwest::Error) -> GeocodingError {
        if e.is_timeout() {
            GeocodingError::Timeout
        } else {
            GeocodingError::ConnectionFailed(e.to_string())
        }
    }

    fn check_status(status: reqwest::StatusCode) -> Result<(), GeocodingError> {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeocodingError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }

    /// Turn a raw place into a candidate, skipping unparsable entries
    fn to_candidate(place: &NominatimPlace) -> Option<LocationCandidate> {
        let latitude: f64 = place.lat.parse().ok()?;
        let longitude: f64 = place.lon.parse().ok()?;
        let coordinate = Coordinate::new(latitude, longitude).ok()?;
        let name = place.display_name.clone()?;
        Some(LocationCandidate::new(name, coordinate))
    }
}

#[async_trait]
impl GeocodingClient for NominatimClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.config.base_url);
        let params = [
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("limit", self.config.max_results.to_string()),
        ];

        debug!(%query, "Searching locations");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.config.language)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        Self::check_status(response.status())?;

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let candidates: Vec<LocationCandidate> =
            places.iter().filter_map(Self::to_candidate).collect();
        debug!(%query, count = candidates.len(), "Search returned candidates");
        Ok(candidates)
    }

    #[instrument(skip(self))]
    async fn reverse(&self, coordinate: Coordinate) -> Result<Option<String>, GeocodingError> {
        let url = format!("{}/reverse", self.config.base_url);
        let params = [
            ("lat", coordinate.latitude().to_string()),
            ("lon", coordinate.longitude().to_string()),
            ("format", "json".to_string()),
            ("zoom", REVERSE_ZOOM.to_string()),
            ("addressdetails", "1".to_string()),
        ];

        debug!(%coordinate, "Reverse geocoding");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.config.language)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        // Nominatim answers 404 for coordinates with no known address
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::check_status(response.status())?;

        let place: NominatimPlace = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(place.display_name)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/status", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
