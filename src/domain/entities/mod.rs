//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence logic.
//!
//! # Design Pattern
//!
//! Separate structs for the lifecycle stages of a record:
//! - [`NewLocation`] - For creating new records
//! - [`LocationPatch`] - For partial updates
//! - [`Location`] - The persisted shape

pub mod location;

pub use location::{Location, LocationPatch, NewLocation};
