//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`geocoder`] - Geocoding provider contract
//! - [`geo`] - Geographic value types and distance math
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository and geocoder traits define contracts implemented by the
//!   infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod geo;
pub mod geocoder;
pub mod repositories;
