//! Geocoding port
//!
//! Forward and reverse geocoding against an external provider. Stateless:
//! each call is independent, no caching, no session affinity.

use async_trait::async_trait;
use domain::value_objects::{Coordinate, LocationCandidate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Interface for geocoding providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-text query to ranked location candidates
    ///
    /// Order follows provider relevance. Implementations must not issue a
    /// network call for an empty or whitespace-only query.
    async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, ApplicationError>;

    /// Resolve a coordinate to a display address
    ///
    /// Returns `None` when the provider has no address for the coordinate.
    async fn reverse(&self, coordinate: Coordinate) -> Result<Option<String>, ApplicationError>;
}
