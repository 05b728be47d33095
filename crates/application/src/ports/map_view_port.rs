//! Map view port
//!
//! Rendering interface the host UI implements. The picker drives it with
//! explicit calls instead of reaching into a global mapping-library handle;
//! drag events flow back in through [`LocationPicker::marker_dragged`].
//!
//! [`LocationPicker::marker_dragged`]: crate::services::LocationPicker::marker_dragged

use domain::value_objects::{Coordinate, TripEndpoint};
#[cfg(test)]
use mockall::automock;

/// Interface for the host map rendering
#[cfg_attr(test, automock)]
pub trait MapViewPort: Send + Sync {
    /// Place or move the marker for one trip endpoint
    fn place_marker(&self, endpoint: TripEndpoint, coordinate: Coordinate);

    /// Render the given route path, styled by whether it is an estimate
    fn draw_route(&self, path: &[Coordinate], is_estimate: bool);

    /// Remove any rendered route
    fn clear_route(&self);

    /// Adjust the viewport to contain all given points
    fn fit_bounds(&self, points: &[Coordinate]);
}

/// A map view that renders nothing, for headless use and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMapView;

impl MapViewPort for NullMapView {
    fn place_marker(&self, _endpoint: TripEndpoint, _coordinate: Coordinate) {}

    fn draw_route(&self, _path: &[Coordinate], _is_estimate: bool) {}

    fn clear_route(&self) {}

    fn fit_bounds(&self, _points: &[Coordinate]) {}
}
