//! Geocoding provider implementations.

pub mod nominatim;

pub use nominatim::NominatimGeocoder;
