//! Routing port
//!
//! Driving-route computation against an external routing provider.

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A driving route as reported by the routing provider
///
/// Geometry is already decoded; metrics are in the provider's raw units.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRoute {
    /// Ordered path from pickup to dropoff
    pub path: Vec<Coordinate>,
    /// Driving distance in meters
    pub distance_m: f64,
    /// Driving duration in seconds
    pub duration_s: f64,
}

/// Interface for routing providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Request a driving route between two coordinates
    async fn driving_route(
        &self,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> Result<ProviderRoute, ApplicationError>;
}
