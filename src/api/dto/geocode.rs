//! DTOs for geocoding passthrough endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Query parameters for `GET /api/geocode`.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub address: String,
}

/// Coordinates resolved from an address.
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Query parameters for `GET /api/geocode/reverse`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ReverseGeocodeQuery {
    #[serde_as(as = "DisplayFromStr")]
    pub lat: f64,

    #[serde_as(as = "DisplayFromStr")]
    pub lon: f64,
}

/// Display address resolved from coordinates.
#[derive(Debug, Serialize)]
pub struct ReverseGeocodeResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}
