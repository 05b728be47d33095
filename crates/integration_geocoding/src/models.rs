//! Raw Nominatim API response types

use serde::Deserialize;

/// One place as returned by Nominatim's search and reverse endpoints
///
/// Coordinates arrive as strings and are parsed by the client.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
}
