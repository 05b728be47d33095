//! Nominatim geocoding integration
//!
//! Client for the [Nominatim](https://nominatim.openstreetmap.org) API
//! (OpenStreetMap). Provides forward search (free text to candidate
//! locations) and reverse lookup (coordinate to display name) without
//! requiring an API key.

pub mod client;
mod models;

pub use client::{GeocodingClient, GeocodingConfig, GeocodingError, NominatimClient};
