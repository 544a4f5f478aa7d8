//! Repository trait for location data access.

use async_trait::async_trait;

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::domain::geo::GeoPoint;
use crate::error::AppError;

/// Repository interface for managing locations.
///
/// Provides CRUD operations plus a proximity query over stored coordinates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLocationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_location.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Inserts a new location row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError>;

    /// Finds a location by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Location))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, AppError>;

    /// Lists locations ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Location>, AppError>;

    /// Counts stored locations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update.
    ///
    /// Only `Some` fields in [`LocationPatch`] are written; `updated_at` is
    /// always refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` does not resolve to a row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: LocationPatch) -> Result<Location, AppError>;

    /// Deletes a location row.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if `id` did not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Returns locations within `radius_meters` of `center`, each paired
    /// with its great-circle distance in meters, ordered nearest first.
    ///
    /// Records without stored coordinates never match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_near(
        &self,
        center: GeoPoint,
        radius_meters: f64,
        limit: i64,
    ) -> Result<Vec<(Location, f64)>, AppError>;
}
