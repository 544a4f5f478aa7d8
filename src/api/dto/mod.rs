//! Data Transfer Objects for request/response serialization.

pub mod geocode;
pub mod health;
pub mod location;
pub mod near;
pub mod pagination;
