//! HTTP request handlers.

pub mod geocode;
pub mod health;
pub mod locations;
pub mod near;

pub use geocode::{geocode_handler, reverse_geocode_handler};
pub use health::health_handler;
pub use locations::{
    create_location_handler, delete_location_handler, get_location_handler,
    list_locations_handler, update_location_handler,
};
pub use near::near_handler;
