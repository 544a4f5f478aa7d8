//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::LocationService;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub location_service: Arc<LocationService>,
    /// Kept for health checks; repositories hold their own reference.
    pub db: Arc<PgPool>,
    /// Geocoder endpoint reported by the health check.
    pub geocoder_url: String,
}

impl AppState {
    /// Creates application state from its components.
    pub fn new(
        location_service: Arc<LocationService>,
        db: Arc<PgPool>,
        geocoder_url: String,
    ) -> Self {
        Self {
            location_service,
            db,
            geocoder_url,
        }
    }
}
