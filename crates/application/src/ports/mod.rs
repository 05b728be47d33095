//! Port definitions for the application layer
//!
//! Ports are the interfaces through which the booking core reaches the
//! outside world. Adapters in the infrastructure layer implement the
//! provider-facing ones; the host UI implements the map view.

mod geocoding_port;
mod map_view_port;
mod routing_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use map_view_port::{MapViewPort, NullMapView};
#[cfg(test)]
pub use map_view_port::MockMapViewPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::{ProviderRoute, RoutingPort};
