//! Driving-route computation with geometric fallback
//!
//! The routing provider is a free, rate-limited third-party service with no
//! SLA, so route computation is provider-first with a straight-line
//! fallback: a booking must never block on the router being down.

use std::sync::Arc;

use domain::value_objects::{Coordinate, RouteResult};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::RoutingPort;

/// Computes driving routes between resolved coordinates
///
/// Stateless: holds only the routing port, no cross-call state.
pub struct RoutePlanner {
    routing: Arc<dyn RoutingPort>,
}

impl std::fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner").finish_non_exhaustive()
    }
}

impl RoutePlanner {
    /// Create a planner over the given routing port
    #[must_use]
    pub fn new(routing: Arc<dyn RoutingPort>) -> Self {
        Self { routing }
    }

    /// Compute a route between two resolved coordinates
    ///
    /// Asks the routing provider first. If the provider is unreachable,
    /// rate limited, timed out, or knows no route, degrades to a
    /// straight-line estimate at an assumed average speed. Only a malformed
    /// provider response surfaces as an error; the caller treats that as
    /// "no route available".
    #[instrument(skip(self))]
    pub async fn compute(
        &self,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> Result<RouteResult, ApplicationError> {
        match self.routing.driving_route(pickup, dropoff).await {
            Ok(route) => {
                debug!(
                    distance_m = route.distance_m,
                    duration_s = route.duration_s,
                    points = route.path.len(),
                    "Provider returned driving route"
                );
                Ok(RouteResult::from_provider(
                    route.path,
                    route.distance_m,
                    route.duration_s,
                ))
            },
            Err(ApplicationError::MalformedResponse(e)) => {
                warn!(error = %e, "Routing provider returned malformed data");
                Err(ApplicationError::RouteUnavailable(e))
            },
            Err(e) => {
                debug!(error = %e, "Routing provider unavailable, using straight-line estimate");
                Ok(RouteResult::estimated(pickup, dropoff))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockRoutingPort, ProviderRoute};

    fn paris() -> Coordinate {
        Coordinate::new_unchecked(48.8566, 2.3522)
    }

    fn lyon() -> Coordinate {
        Coordinate::new_unchecked(45.7640, 4.8357)
    }

    #[tokio::test]
    async fn test_provider_route_is_converted() {
        let mut routing = MockRoutingPort::new();
        routing.expect_driving_route().returning(|pickup, dropoff| {
            Ok(ProviderRoute {
                path: vec![pickup, dropoff],
                distance_m: 463_000.0,
                duration_s: 16_740.0,
            })
        });

        let planner = RoutePlanner::new(Arc::new(routing));
        let route = planner.compute(paris(), lyon()).await.expect("route");

        assert!((route.distance_km - 463.0).abs() < f64::EPSILON);
        assert_eq!(route.duration_min, 279);
        assert!(!route.is_estimate);
    }

    #[tokio::test]
    async fn test_unreachable_provider_falls_back_to_estimate() {
        let mut routing = MockRoutingPort::new();
        routing.expect_driving_route().returning(|_, _| {
            Err(ApplicationError::ExternalService(
                "connection refused".to_string(),
            ))
        });

        let planner = RoutePlanner::new(Arc::new(routing));
        let route = planner.compute(paris(), lyon()).await.expect("estimate");

        assert!(route.is_estimate);
        assert_eq!(route.path, vec![paris(), lyon()]);
        let expected = paris().distance_km(&lyon());
        assert!((route.distance_km - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_empty_route_list_falls_back_to_estimate() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_driving_route()
            .returning(|_, _| Err(ApplicationError::NotFound("no route".to_string())));

        let planner = RoutePlanner::new(Arc::new(routing));
        let route = planner.compute(paris(), lyon()).await.expect("estimate");
        assert!(route.is_estimate);
    }

    #[tokio::test]
    async fn test_rate_limit_falls_back_to_estimate() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_driving_route()
            .returning(|_, _| Err(ApplicationError::RateLimited));

        let planner = RoutePlanner::new(Arc::new(routing));
        let route = planner.compute(paris(), lyon()).await.expect("estimate");
        assert!(route.is_estimate);
    }

    #[tokio::test]
    async fn test_malformed_response_is_not_estimated() {
        let mut routing = MockRoutingPort::new();
        routing.expect_driving_route().returning(|_, _| {
            Err(ApplicationError::MalformedResponse(
                "undecodable geometry".to_string(),
            ))
        });

        let planner = RoutePlanner::new(Arc::new(routing));
        let result = planner.compute(paris(), lyon()).await;
        assert!(matches!(
            result,
            Err(ApplicationError::RouteUnavailable(_))
        ));
    }
}
