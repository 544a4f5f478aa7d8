//! Application layer orchestrating domain operations.
//!
//! Services combine repository and geocoder contracts into the business
//! workflows exposed by the API layer.

pub mod services;
