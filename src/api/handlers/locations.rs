//! Handlers for location management endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::location::{
    CreateLocationRequest, LocationListResponse, LocationResponse, UpdateLocationRequest,
};
use crate::api::dto::pagination::PaginationParams;
use crate::domain::entities::{LocationPatch, NewLocation};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a location.
///
/// # Endpoint
///
/// `POST /api/locations`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Central Park",              // optional
///   "address": "New York, NY, USA",      // optional; triggers geocoding
///   "latitude": 40.785091,               // optional; ignored when address present
///   "longitude": -73.968285
/// }
/// ```
///
/// # Errors
///
/// Returns 400 on validation failure, 422 when the address cannot be
/// geocoded, 409 when the name is already taken.
pub async fn create_location_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>), AppError> {
    payload.validate()?;

    let location = state
        .location_service
        .create_location(NewLocation {
            name: payload.name,
            address: payload.address,
            latitude: payload.latitude,
            longitude: payload.longitude,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(location.into())))
}

/// Returns a single location.
///
/// # Endpoint
///
/// `GET /api/locations/{id}`
pub async fn get_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LocationResponse>, AppError> {
    let location = state.location_service.get_location(id).await?;
    Ok(Json(location.into()))
}

/// Lists locations, newest first.
///
/// # Endpoint
///
/// `GET /api/locations?page=1&page_size=50`
pub async fn list_locations_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<LocationListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|msg| AppError::bad_request(msg, json!({})))?;

    let (items, total) = state.location_service.list_locations(offset, limit).await?;

    Ok(Json(LocationListResponse {
        total,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// Partially updates a location.
///
/// # Endpoint
///
/// `PATCH /api/locations/{id}`
///
/// # Behavior
///
/// Changing the address re-geocodes and overwrites stored coordinates; an
/// unchanged or absent address leaves coordinates untouched, even when the
/// body carries explicit values. A failed geocoding call rejects the update
/// without touching the record.
///
/// # Errors
///
/// Returns 404 when the location doesn't exist, 422 when a changed address
/// cannot be geocoded, 400 on validation failure.
pub async fn update_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    payload.validate()?;

    let location = state
        .location_service
        .update_location(
            id,
            LocationPatch {
                name: payload.name,
                address: payload.address,
                latitude: payload.latitude,
                longitude: payload.longitude,
            },
        )
        .await?;

    Ok(Json(location.into()))
}

/// Deletes a location.
///
/// # Endpoint
///
/// `DELETE /api/locations/{id}`
///
/// # Errors
///
/// Returns 404 when `id` does not resolve to a record; storage is left
/// unchanged in that case.
pub async fn delete_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.location_service.delete_location(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
