//! Value objects for the booking route core

mod candidate;
mod coordinate;
mod resolved_location;
mod route;
mod trip_endpoint;

pub use candidate::LocationCandidate;
pub use coordinate::{Coordinate, InvalidCoordinate};
pub use resolved_location::ResolvedLocation;
pub use route::{AVERAGE_SPEED_KMH, RouteResult};
pub use trip_endpoint::TripEndpoint;
