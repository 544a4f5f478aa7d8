//! Infrastructure layer for external integrations.
//!
//! Implements the contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`geocoding`] - HTTP geocoding provider client
//! - [`persistence`] - PostgreSQL repository implementations

pub mod geocoding;
pub mod persistence;
