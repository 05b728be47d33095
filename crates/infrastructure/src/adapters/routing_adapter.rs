//! Routing adapter - Implements RoutingPort using integration_routing

use application::error::ApplicationError;
use application::ports::{ProviderRoute, RoutingPort};
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use integration_routing::{OsrmClient, RoutingClient, RoutingError};
use tracing::instrument;

/// Adapter for driving routes via OSRM
pub struct RoutingAdapter {
    client: OsrmClient,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"OsrmClient")
            .finish()
    }
}

impl RoutingAdapter {
    /// Create a new routing adapter
    pub fn new(client: OsrmClient) -> Self {
        Self { client }
    }

    /// Undecodable geometry and unparsable bodies map to
    /// [`ApplicationError::MalformedResponse`] so callers do not fall back
    /// to an estimate on data the provider got wrong.
    fn map_error(e: RoutingError) -> ApplicationError {
        match e {
            RoutingError::InvalidGeometry(msg) | RoutingError::ParseError(msg) => {
                ApplicationError::MalformedResponse(msg)
            },
            RoutingError::NoRoute(msg) => ApplicationError::NotFound(msg),
            RoutingError::RateLimitExceeded => ApplicationError::RateLimited,
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self))]
    async fn driving_route(
        &self,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> Result<ProviderRoute, ApplicationError> {
        let route = self
            .client
            .driving_route(pickup, dropoff)
            .await
            .map_err(Self::map_error)?;

        Ok(ProviderRoute {
            path: route.path,
            distance_m: route.distance_m,
            duration_s: route.duration_s,
        })
    }
}
