//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::{Coordinate, LocationCandidate};
use integration_geocoding::{GeocodingClient, GeocodingError, NominatimClient};
use tracing::instrument;

/// Adapter for forward and reverse geocoding via Nominatim
pub struct GeocodingAdapter {
    client: NominatimClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"NominatimClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new geocoding adapter
    pub fn new(client: NominatimClient) -> Self {
        Self { client }
    }

    fn map_error(e: GeocodingError) -> ApplicationError {
        match e {
            GeocodingError::RateLimitExceeded => ApplicationError::RateLimited,
            GeocodingError::ParseError(msg) => ApplicationError::MalformedResponse(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, ApplicationError> {
        self.client.search(query).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn reverse(&self, coordinate: Coordinate) -> Result<Option<String>, ApplicationError> {
        self.client.reverse(coordinate).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_maps_to_rate_limited() {
        let err = GeocodingAdapter::map_error(GeocodingError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn test_parse_error_maps_to_malformed() {
        let err = GeocodingAdapter::map_error(GeocodingError::ParseError("bad json".to_string()));
        assert!(matches!(err, ApplicationError::MalformedResponse(_)));
    }

    #[test]
    fn test_timeout_maps_to_external_service() {
        let err = GeocodingAdapter::map_error(GeocodingError::Timeout);
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}
