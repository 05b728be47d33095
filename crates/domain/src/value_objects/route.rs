//! Route result value object

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Assumed average driving speed for the straight-line estimate, in km/h
pub const AVERAGE_SPEED_KMH: f64 = 50.0;

/// A computed route between pickup and dropoff
///
/// Created once per resolved pickup+dropoff pairing and replaced, never
/// mutated, whenever either endpoint changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Ordered path from pickup to dropoff
    pub path: Vec<Coordinate>,
    /// Driving distance in kilometers
    pub distance_km: f64,
    /// Driving duration in minutes
    pub duration_min: u32,
    /// True when this is a straight-line estimate rather than a provider route
    pub is_estimate: bool,
}

impl RouteResult {
    /// Build a result from provider metrics
    ///
    /// Distance comes in meters and is rounded to one decimal of a
    /// kilometer; duration comes in seconds and is rounded to whole minutes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_provider(path: Vec<Coordinate>, distance_m: f64, duration_s: f64) -> Self {
        Self {
            path,
            distance_km: (distance_m / 100.0).round() / 10.0,
            duration_min: (duration_s / 60.0).round() as u32,
            is_estimate: false,
        }
    }

    /// Straight-line estimate between two coordinates
    ///
    /// Used when the routing provider is unavailable: great-circle distance
    /// at an assumed average speed, with a two-point path. Pure arithmetic,
    /// cannot fail.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn estimated(pickup: Coordinate, dropoff: Coordinate) -> Self {
        let distance_km = pickup.distance_km(&dropoff);
        Self {
            path: vec![pickup, dropoff],
            distance_km,
            duration_min: (distance_km / AVERAGE_SPEED_KMH * 60.0).round() as u32,
            is_estimate: true,
        }
    }
}
