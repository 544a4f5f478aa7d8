//! Geocoding provider contract.

use async_trait::async_trait;

use crate::domain::geo::GeoPoint;

/// Errors surfaced by a geocoding provider.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("no match for address: {address}")]
    NoMatch { address: String },

    #[error("geocoding provider failure: {0}")]
    Provider(String),
}

/// A geocoding provider resolving addresses to coordinates and back.
///
/// The trait defines no retry, backoff, or rate-limit policy; a provider
/// outage surfaces immediately as [`GeocodeError::Provider`] to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::geocoding::NominatimGeocoder`] - HTTP client
///   for Nominatim-compatible APIs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a free-text address to its best-match coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::NoMatch`] when the provider has no result and
    /// [`GeocodeError::Provider`] on transport or provider failures.
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError>;

    /// Resolves coordinates to a display address.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::geocode`].
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<String, GeocodeError>;
}
