//! Trip endpoint identifier

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which end of the trip a location or marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripEndpoint {
    /// Where the ride starts
    Pickup,
    /// Where the ride ends
    Dropoff,
}

impl fmt::Display for TripEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pickup => write!(f, "pickup"),
            Self::Dropoff => write!(f, "dropoff"),
        }
    }
}
