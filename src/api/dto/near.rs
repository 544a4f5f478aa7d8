//! DTOs for the proximity search endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::api::dto::location::LocationResponse;

/// Query parameters for `GET /api/locations/near`.
///
/// Uses `serde_with` to parse numbers out of query strings; range checks
/// happen in the service layer so validation failures skip storage entirely.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct NearQuery {
    #[serde_as(as = "DisplayFromStr")]
    pub lat: f64,

    #[serde_as(as = "DisplayFromStr")]
    pub lon: f64,

    /// Search radius in meters.
    #[serde_as(as = "DisplayFromStr")]
    pub radius: f64,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

/// A location matched by a proximity query.
#[derive(Debug, Serialize)]
pub struct NearItem {
    #[serde(flatten)]
    pub location: LocationResponse,

    /// Great-circle distance from the query point in meters.
    pub distance_meters: f64,
}

/// Response for a proximity query, ordered nearest first.
#[derive(Debug, Serialize)]
pub struct NearResponse {
    pub count: usize,
    pub items: Vec<NearItem>,
}
