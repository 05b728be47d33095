//! Application services

mod location_picker;
mod route_planner;

pub use location_picker::{EndpointState, LocationPicker, LocationPickerConfig};
pub use route_planner::RoutePlanner;
