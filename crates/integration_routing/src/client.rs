//! OSRM HTTP client
//!
//! Requests driving routes from an OSRM route service and decodes the
//! polyline geometry. Coordinates go into the URL as longitude,latitude
//! pairs, which is the OSRM convention, reversed from the usual order.

use std::time::Duration;

use async_trait::async_trait;
use domain::polyline;
use domain::value_objects::Coordinate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{DrivingRoute, OsrmResponse};

/// Routing client errors
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Routing connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the routing service failed
    #[error("Routing request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the routing response
    #[error("Routing parse error: {0}")]
    ParseError(String),

    /// The response parsed but its route geometry is undecodable
    #[error("Invalid route geometry: {0}")]
    InvalidGeometry(String),

    /// The service knows no route between the given points
    #[error("No route between the given points: {0}")]
    NoRoute(String),

    /// Service is temporarily unavailable
    #[error("Routing service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Routing rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Routing request timed out")]
    Timeout,
}

/// OSRM service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// OSRM base URL (default: <https://router.project-osrm.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl RoutingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Request a driving route between two coordinates
    async fn driving_route(
        &self,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> Result<DrivingRoute, RoutingError>;

    /// Check if the routing service is reachable
    async fn is_healthy(&self) -> bool;
}

/// OSRM HTTP client implementation
#[derive(Debug)]
pub struct OsrmClient {
    client: Client,
    config: RoutingConfig,
}

impl OsrmClient {
    /// Create a new OSRM client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, RoutingError> {
        Self::new(RoutingConfig::default())
    }

    /// Build the route request URL for a pickup/dropoff pair
    fn build_route_url(&self, pickup: Coordinate, dropoff: Coordinate) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=polyline",
            self.config.base_url,
            pickup.longitude(),
            pickup.latitude(),
            dropoff.longitude(),
            dropoff.latitude(),
        )
    }
}

#[async_trait]
impl RoutingClient for OsrmClient {
    #[instrument(skip(self))]
    async fn driving_route(
        &self,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> Result<DrivingRoute, RoutingError> {
        let url = self.build_route_url(pickup, dropoff);
        debug!(url = %url, "Requesting driving route");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RoutingError::Timeout
            } else {
                RoutingError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(RoutingError::ServiceUnavailable(format!("HTTP {status}")));
        }
        // OSRM reports NoRoute and similar with a 400 and a code field, so
        // the body is parsed even on client errors
        let body: OsrmResponse = response
            .json()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if body.code != "Ok" {
            let detail = body.message.unwrap_or(body.code);
            return Err(RoutingError::NoRoute(detail));
        }

        let route = body
            .routes
            .first()
            .ok_or_else(|| RoutingError::NoRoute("response carried no routes".to_string()))?;

        let path = polyline::decode(&route.geometry)
            .map_err(|e| RoutingError::InvalidGeometry(e.to_string()))?;

        debug!(
            distance_m = route.distance,
            duration_s = route.duration,
            points = path.len(),
            "Decoded driving route"
        );

        Ok(DrivingRoute {
            path,
            distance_m: route.distance,
            duration_s: route.duration,
        })
    }

    async fn is_healthy(&self) -> bool {
        // Short hop through central Paris
        let pickup = Coordinate::new_unchecked(48.8566, 2.3522);
        let dropoff = Coordinate::new_unchecked(48.8606, 2.3376);
        self.driving_route(pickup, dropoff).await.is_ok()
    }
}
