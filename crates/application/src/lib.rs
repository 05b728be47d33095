//! Application layer - location resolution and route orchestration
//!
//! Defines the ports the booking core needs from the outside world
//! (geocoding, routing, map rendering) and the services that orchestrate
//! them: [`RoutePlanner`] for provider-first route computation with a
//! geometric fallback, and [`LocationPicker`] for debounced search, marker
//! drags, and route triggering.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
