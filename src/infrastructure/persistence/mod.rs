//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.

pub mod pg_location_repository;

pub use pg_location_repository::PgLocationRepository;
