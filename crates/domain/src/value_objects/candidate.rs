//! Geocoding candidate value object

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A single candidate returned by forward geocoding
///
/// Immutable and ephemeral: candidates live only within one search response
/// and are discarded once the user selects one or issues a new search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    /// Human-readable address as reported by the provider
    pub display_name: String,
    /// Resolved coordinate
    pub coordinate: Coordinate,
}

impl LocationCandidate {
    /// Create a new candidate
    pub fn new(display_name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            display_name: display_name.into(),
            coordinate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_candidate() {
        let coord = Coordinate::new(48.8566, 2.3522).expect("valid");
        let candidate = LocationCandidate::new("Paris, France", coord);
        assert_eq!(candidate.display_name, "Paris, France");
        assert_eq!(candidate.coordinate, coord);
    }

    #[test]
    fn test_serialization() {
        let coord = Coordinate::new(48.8566, 2.3522).expect("valid");
        let candidate = LocationCandidate::new("Paris, France", coord);
        let json = serde_json::to_string(&candidate).expect("serialize");
        assert!(json.contains("Paris, France"));
        let back: LocationCandidate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, candidate);
    }
}
