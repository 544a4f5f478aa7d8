//! Location entity representing a named place with geocoded coordinates.

use chrono::{DateTime, Utc};

use crate::domain::geo::GeoPoint;

/// A stored location record.
///
/// Coordinates are optional: a record created without an address carries
/// whatever coordinates the caller supplied, possibly none. When an address
/// is present, coordinates always come from the geocoding provider.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// Creates a new Location instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: Option<String>,
        address: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            address,
            latitude,
            longitude,
            created_at,
            updated_at,
        }
    }

    /// Returns the stored coordinates when both components are present.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// Returns true when the given address differs byte-for-byte from the
    /// stored one. `None` (address not part of the change-set) never counts
    /// as a change.
    pub fn address_changed(&self, incoming: Option<&str>) -> bool {
        match incoming {
            Some(new) => self.address.as_deref() != Some(new),
            None => false,
        }
    }
}

/// Input data for creating a new location.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Partial update for an existing location.
///
/// `None` fields are left unchanged. The service layer owns the decision of
/// whether coordinates are written; see
/// [`crate::application::services::LocationService::update_location`].
#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
