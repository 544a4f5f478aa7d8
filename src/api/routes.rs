//! API route configuration.

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{
    create_location_handler, delete_location_handler, geocode_handler, get_location_handler,
    list_locations_handler, near_handler, reverse_geocode_handler, update_location_handler,
};
use crate::state::AppState;

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /locations`          - Create a location (geocodes when an address is present)
/// - `GET    /locations`          - List locations (paginated)
/// - `GET    /locations/near`     - Proximity search around a point
/// - `GET    /locations/{id}`     - Fetch a single location
/// - `PATCH  /locations/{id}`     - Partial update (re-geocodes only on address change)
/// - `DELETE /locations/{id}`     - Delete a location
/// - `GET    /geocode`            - Resolve an address to coordinates
/// - `GET    /geocode/reverse`    - Resolve coordinates to an address
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/locations",
            post(create_location_handler).get(list_locations_handler),
        )
        .route("/locations/near", get(near_handler))
        .route(
            "/locations/{id}",
            get(get_location_handler)
                .patch(update_location_handler)
                .delete(delete_location_handler),
        )
        .route("/geocode", get(geocode_handler))
        .route("/geocode/reverse", get(reverse_geocode_handler))
}
