//! Handlers for geocoding passthrough endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::dto::geocode::{
    GeocodeQuery, GeocodeResponse, ReverseGeocodeQuery, ReverseGeocodeResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a free-text address to coordinates.
///
/// # Endpoint
///
/// `GET /api/geocode?address=New%20York`
///
/// # Errors
///
/// Returns 400 for a blank address, 422 when the provider has no match or
/// fails.
pub async fn geocode_handler(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>, AppError> {
    let point = state.location_service.geocode_address(&query.address).await?;

    Ok(Json(GeocodeResponse {
        address: query.address,
        latitude: point.latitude,
        longitude: point.longitude,
    }))
}

/// Resolves coordinates to a display address.
///
/// # Endpoint
///
/// `GET /api/geocode/reverse?lat=40.785091&lon=-73.968285`
///
/// # Errors
///
/// Returns 400 for out-of-range coordinates, 422 when the provider has no
/// match or fails.
pub async fn reverse_geocode_handler(
    State(state): State<AppState>,
    Query(query): Query<ReverseGeocodeQuery>,
) -> Result<Json<ReverseGeocodeResponse>, AppError> {
    let address = state
        .location_service
        .reverse_geocode(query.lat, query.lon)
        .await?;

    Ok(Json(ReverseGeocodeResponse {
        latitude: query.lat,
        longitude: query.lon,
        address,
    }))
}
