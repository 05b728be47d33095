//! Domain layer for the booking route core
//!
//! Contains the value objects shared by every layer (coordinates, location
//! candidates, route results) and the encoded-polyline codec. This layer
//! performs no I/O and has no knowledge of any provider.

pub mod polyline;
pub mod value_objects;

pub use polyline::PolylineError;
pub use value_objects::*;
