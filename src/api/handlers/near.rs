//! Handler for the proximity search endpoint.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::dto::near::{NearItem, NearQuery, NearResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns locations within a radius of a point, nearest first.
///
/// # Endpoint
///
/// `GET /api/locations/near?lat=40.785091&lon=-73.968285&radius=1000`
///
/// Radius is in meters; `limit` is optional. Each item carries its
/// great-circle distance from the query point.
///
/// # Errors
///
/// Returns 400 for out-of-range coordinates or a negative radius; no storage
/// query is issued in that case.
pub async fn near_handler(
    State(state): State<AppState>,
    Query(query): Query<NearQuery>,
) -> Result<Json<NearResponse>, AppError> {
    let matches = state
        .location_service
        .find_near(query.lat, query.lon, query.radius, query.limit)
        .await?;

    let items: Vec<NearItem> = matches
        .into_iter()
        .map(|(location, distance_meters)| NearItem {
            location: location.into(),
            distance_meters,
        })
        .collect();

    Ok(Json(NearResponse {
        count: items.len(),
        items,
    }))
}
