use serde::{Deserialize, Serialize};

/// A city returned by the lookup service for a search query.
///
/// Several candidates may share a name; the country and coordinates tell them
/// apart, and the position in the list identifies them.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CityCandidate {
    /// Display name (often the full geocoder address)
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Hours from UTC
    pub timezone: f64,
}
