//! HTTP geocoder client for Nominatim-compatible APIs.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::geo::GeoPoint;
use crate::domain::geocoder::{GeocodeError, Geocoder};

/// One entry of a Nominatim `/search` response.
///
/// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

/// A Nominatim `/reverse` response.
#[derive(Debug, Deserialize)]
struct ReverseResult {
    display_name: Option<String>,
    error: Option<String>,
}

/// Geocoder backed by a Nominatim-compatible HTTP API.
///
/// Performs no retry or rate limiting of its own; the only local policy is
/// the request timeout on the HTTP client. Nominatim's usage policy requires
/// an identifying User-Agent, which callers supply at construction.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// Builds a client for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Provider`] if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| GeocodeError::Provider(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn parse_coordinate(raw: &str, field: &str) -> Result<f64, GeocodeError> {
        raw.parse::<f64>().map_err(|_| {
            GeocodeError::Provider(format!("unparseable {field} in provider response: {raw}"))
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        tracing::debug!(address, "Geocoding via Nominatim");

        let response = self
            .client
            .get(&url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Provider(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Provider(e.to_string()))?;

        let Some(best) = results.into_iter().next() else {
            return Err(GeocodeError::NoMatch {
                address: address.to_string(),
            });
        };

        let latitude = Self::parse_coordinate(&best.lat, "latitude")?;
        let longitude = Self::parse_coordinate(&best.lon, "longitude")?;

        GeoPoint::new(latitude, longitude).map_err(|_| {
            GeocodeError::Provider(format!(
                "provider returned out-of-range coordinates: {latitude}, {longitude}"
            ))
        })
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<String, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);

        tracing::debug!(
            latitude = point.latitude,
            longitude = point.longitude,
            "Reverse geocoding via Nominatim"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", point.latitude.to_string()),
                ("lon", point.longitude.to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Provider(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let result: ReverseResult = response
            .json()
            .await
            .map_err(|e| GeocodeError::Provider(e.to_string()))?;

        // Nominatim reports "Unable to geocode" as a 200 with an error field.
        if result.error.is_some() {
            return Err(GeocodeError::NoMatch {
                address: format!("{}, {}", point.latitude, point.longitude),
            });
        }

        result.display_name.ok_or_else(|| {
            GeocodeError::Provider("provider response missing display_name".to_string())
        })
    }
}
