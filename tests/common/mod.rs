#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use geodex::application::services::LocationService;
use geodex::domain::geo::GeoPoint;
use geodex::domain::geocoder::{GeocodeError, Geocoder};
use geodex::infrastructure::persistence::PgLocationRepository;
use geodex::state::AppState;

/// In-memory geocoder with a fixed address book and a call counter.
///
/// Handler tests assert the exact number of geocoding calls an operation
/// performs, which is the core contract of the service.
pub struct FakeGeocoder {
    results: HashMap<String, GeoPoint>,
    calls: Arc<AtomicUsize>,
}

impl FakeGeocoder {
    pub fn new(calls: Arc<AtomicUsize>) -> Self {
        let mut results = HashMap::new();
        results.insert(
            "New York, NY, USA".to_string(),
            GeoPoint {
                latitude: 40.785091,
                longitude: -73.968285,
            },
        );
        results.insert(
            "Champ de Mars, Paris, France".to_string(),
            GeoPoint {
                latitude: 48.858370,
                longitude: 2.294481,
            },
        );
        results.insert(
            "Bennelong Point, Sydney NSW, Australia".to_string(),
            GeoPoint {
                latitude: -33.856784,
                longitude: 151.215297,
            },
        );

        Self { results, calls }
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.results
            .get(address)
            .copied()
            .ok_or_else(|| GeocodeError::NoMatch {
                address: address.to_string(),
            })
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<String, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.results
            .iter()
            .find(|(_, p)| {
                (p.latitude - point.latitude).abs() < 1e-6
                    && (p.longitude - point.longitude).abs() < 1e-6
            })
            .map(|(address, _)| address.clone())
            .ok_or_else(|| GeocodeError::NoMatch {
                address: format!("{}, {}", point.latitude, point.longitude),
            })
    }
}

/// Builds application state over a real pool and the fake geocoder.
///
/// Returns the shared geocoding call counter alongside the state.
pub fn create_test_state(pool: PgPool) -> (AppState, Arc<AtomicUsize>) {
    let pool = Arc::new(pool);
    let calls = Arc::new(AtomicUsize::new(0));

    let location_repo = Arc::new(PgLocationRepository::new(pool.clone()));
    let geocoder = Arc::new(FakeGeocoder::new(calls.clone()));
    let location_service = Arc::new(LocationService::new(location_repo, geocoder));

    let state = AppState::new(
        location_service,
        pool,
        "https://geocoder.test".to_string(),
    );

    (state, calls)
}

/// Inserts a location row directly, bypassing the service layer.
pub async fn insert_location(
    pool: &PgPool,
    name: &str,
    address: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO locations (name, address, latitude, longitude)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(address)
    .bind(latitude)
    .bind(longitude)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn location_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM locations")
        .fetch_one(pool)
        .await
        .unwrap()
}
