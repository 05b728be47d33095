//! Per-endpoint resolved location state

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// What the user has entered and resolved for one trip endpoint
///
/// The query text and the coordinate evolve independently: typing updates
/// the query and clears the coordinate, a marker drag updates the coordinate
/// and (after reverse geocoding) the query. `coordinate` is `None` until a
/// resolution succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Free-text query or the display name of the resolution
    pub query: String,
    /// Resolved coordinate, if any
    pub coordinate: Option<Coordinate>,
}

impl ResolvedLocation {
    /// Create an unresolved location from query text
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            coordinate: None,
        }
    }

    /// True once a coordinate has been resolved
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.coordinate.is_some()
    }
}
