//! Location lifecycle and proximity query service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::domain::geo::GeoPoint;
use crate::domain::geocoder::Geocoder;
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

/// Maximum number of rows a proximity query may return.
const NEAR_LIMIT_CAP: i64 = 500;

/// Service owning the location record lifecycle.
///
/// Enforces the re-geocode-only-on-address-change rule: a geocoding call
/// happens exactly when an incoming address differs byte-for-byte from the
/// stored one (creation counts as a change from nothing). The provider result
/// always overrides caller-supplied coordinates for that operation; when the
/// address is untouched, stored coordinates are left alone.
pub struct LocationService {
    locations: Arc<dyn LocationRepository>,
    geocoder: Arc<dyn Geocoder>,
}

impl LocationService {
    /// Creates a new location service.
    pub fn new(locations: Arc<dyn LocationRepository>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            locations,
            geocoder,
        }
    }

    /// Creates a location record.
    ///
    /// With an address present, the geocoder is invoked once and its result
    /// replaces any caller-supplied coordinates; on provider failure nothing
    /// is persisted. Without an address, caller coordinates are validated for
    /// range and stored as-is (or left absent).
    ///
    /// # Errors
    ///
    /// - [`AppError::Geocode`] when the address cannot be resolved
    /// - [`AppError::Validation`] for out-of-range explicit coordinates or a
    ///   half-supplied coordinate pair
    /// - [`AppError::Conflict`] when the name is already taken
    pub async fn create_location(&self, mut input: NewLocation) -> Result<Location, AppError> {
        match input.address.as_deref() {
            Some(address) => {
                let point = self.geocoder.geocode(address).await?;
                input.latitude = Some(point.latitude);
                input.longitude = Some(point.longitude);
            }
            None => {
                validate_explicit_coordinates(input.latitude, input.longitude)?;
            }
        }

        let location = self.locations.create(input).await?;
        tracing::info!(id = location.id, "Location created");
        Ok(location)
    }

    /// Retrieves a location by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id`.
    pub async fn get_location(&self, id: i64) -> Result<Location, AppError> {
        self.locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found", json!({ "id": id })))
    }

    /// Lists locations newest-first together with the total count.
    pub async fn list_locations(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Location>, i64), AppError> {
        let items = self.locations.list(offset, limit).await?;
        let total = self.locations.count().await?;
        Ok((items, total))
    }

    /// Partially updates a location.
    ///
    /// The incoming address is diffed byte-for-byte against the stored value.
    /// Only on a real change is the geocoder invoked, and its result becomes
    /// the stored coordinates. When the address is absent from the change-set
    /// or equals the stored string, coordinates are left untouched even if
    /// the patch carries explicit coordinate values.
    ///
    /// A geocoding failure rejects the whole update; the previously persisted
    /// address and coordinates remain unchanged.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if `id` does not resolve to a record
    /// - [`AppError::Geocode`] when a changed address cannot be resolved
    pub async fn update_location(
        &self,
        id: i64,
        mut patch: LocationPatch,
    ) -> Result<Location, AppError> {
        let current = self.get_location(id).await?;

        if let Some(address) = patch
            .address
            .as_deref()
            .filter(|a| current.address_changed(Some(*a)))
        {
            let point = self.geocoder.geocode(address).await?;
            patch.latitude = Some(point.latitude);
            patch.longitude = Some(point.longitude);
        } else {
            // Address untouched: stored coordinates win over explicit ones.
            patch.latitude = None;
            patch.longitude = None;
            patch.address = None;
        }

        let location = self.locations.update(id, patch).await?;
        tracing::info!(id, "Location updated");
        Ok(location)
    }

    /// Deletes a location.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` does not exist.
    pub async fn delete_location(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.locations.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                "Location not found",
                json!({ "id": id }),
            ));
        }

        tracing::info!(id, "Location deleted");
        Ok(())
    }

    /// Returns locations within `radius_meters` of the query point, paired
    /// with their distance in meters, nearest first.
    ///
    /// Input is validated before any storage query is issued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for out-of-range coordinates, a
    /// negative or non-finite radius, or a non-positive limit.
    pub async fn find_near(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
        limit: Option<i64>,
    ) -> Result<Vec<(Location, f64)>, AppError> {
        let center = GeoPoint::new(latitude, longitude)?;

        if !radius_meters.is_finite() || radius_meters < 0.0 {
            return Err(AppError::bad_request(
                "Radius must be a non-negative number of meters",
                json!({ "radius": radius_meters }),
            ));
        }

        let limit = limit.unwrap_or(NEAR_LIMIT_CAP);
        if !(1..=NEAR_LIMIT_CAP).contains(&limit) {
            return Err(AppError::bad_request(
                "Limit must be between 1 and 500",
                json!({ "limit": limit }),
            ));
        }

        self.locations.find_near(center, radius_meters, limit).await
    }

    /// Resolves a free-text address to coordinates via the provider.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank address and
    /// [`AppError::Geocode`] when the provider has no match or fails.
    pub async fn geocode_address(&self, address: &str) -> Result<GeoPoint, AppError> {
        if address.trim().is_empty() {
            return Err(AppError::bad_request(
                "Address must not be blank",
                json!({}),
            ));
        }

        Ok(self.geocoder.geocode(address).await?)
    }

    /// Resolves coordinates to a display address via the provider.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for out-of-range coordinates and
    /// [`AppError::Geocode`] when the provider has no match or fails.
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, AppError> {
        let point = GeoPoint::new(latitude, longitude)?;
        Ok(self.geocoder.reverse_geocode(point).await?)
    }
}

/// Range-checks caller-supplied coordinates on address-less creation.
///
/// Either both components are present and in range, or both are absent.
fn validate_explicit_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(), AppError> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).map(|_| ()),
        (None, None) => Ok(()),
        _ => Err(AppError::bad_request(
            "Latitude and longitude must be supplied together",
            json!({ "latitude": latitude, "longitude": longitude }),
        )),
    }
}
