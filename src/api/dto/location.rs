//! DTOs for location CRUD endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Location;

/// Request to create a location.
///
/// Either an address (to be geocoded) or an explicit coordinate pair is
/// expected; a bare named record is also allowed.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    /// Display label. Unique across the directory when present.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    /// Free-text postal/geographic address. When present, coordinates are
    /// resolved by the geocoding provider and any explicit values below are
    /// ignored.
    #[validate(length(min = 1, max = 1024))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// Partial update for a location. All fields are optional; absent fields are
/// left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    /// A changed address triggers exactly one geocoding call; an unchanged
    /// one leaves stored coordinates untouched.
    #[validate(length(min = 1, max = 1024))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// JSON representation of a stored location.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            address: location.address,
            latitude: location.latitude,
            longitude: location.longitude,
            created_at: location.created_at,
            updated_at: location.updated_at,
        }
    }
}

/// Paginated location listing.
#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub total: i64,
    pub items: Vec<LocationResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_valid() {
        let req = CreateLocationRequest {
            name: Some("Central Park".to_string()),
            address: Some("New York, NY, USA".to_string()),
            latitude: None,
            longitude: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_out_of_range_latitude() {
        let req = CreateLocationRequest {
            name: None,
            address: None,
            latitude: Some(91.0),
            longitude: Some(0.0),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req = CreateLocationRequest {
            name: Some(String::new()),
            address: None,
            latitude: None,
            longitude: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_all_absent_is_valid() {
        let req: UpdateLocationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.name.is_none());
        assert!(req.address.is_none());
    }
}
