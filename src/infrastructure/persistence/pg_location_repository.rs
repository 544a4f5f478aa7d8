//! PostgreSQL implementation of the location repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::domain::geo::GeoPoint;
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

/// Row shape shared by every query returning full location records.
#[derive(FromRow)]
struct LocationRow {
    id: i64,
    name: Option<String>,
    address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location::new(
            row.id,
            row.name,
            row.address,
            row.latitude,
            row.longitude,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL repository for location storage and retrieval.
///
/// Proximity queries run a bounding-box pre-filter in SQL and compute the
/// exact great-circle distance in Rust before ordering and truncating.
pub struct PgLocationRepository {
    pool: Arc<PgPool>,
}

impl PgLocationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            INSERT INTO locations (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, latitude, longitude, created_at, updated_at
            "#,
        )
        .bind(new_location.name)
        .bind(new_location.address)
        .bind(new_location.latitude)
        .bind(new_location.longitude)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at, updated_at
            FROM locations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Location>, AppError> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at, updated_at
            FROM locations
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: LocationPatch) -> Result<Location, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            UPDATE locations SET
                name       = COALESCE($2, name),
                address    = COALESCE($3, address),
                latitude   = COALESCE($4, latitude),
                longitude  = COALESCE($5, longitude),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, address, latitude, longitude, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.address)
        .bind(patch.latitude)
        .bind(patch.longitude)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Location not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_near(
        &self,
        center: GeoPoint,
        radius_meters: f64,
        limit: i64,
    ) -> Result<Vec<(Location, f64)>, AppError> {
        let (min_lat, max_lat, min_lon, max_lon) = center.bounding_box(radius_meters);

        // min_lon > max_lon means the box wraps through the antimeridian and
        // the longitude filter becomes two disjoint ranges.
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at, updated_at
            FROM locations
            WHERE latitude BETWEEN $1 AND $2
              AND CASE WHEN $3 <= $4
                  THEN longitude BETWEEN $3 AND $4
                  ELSE longitude >= $3 OR longitude <= $4
                  END
            "#,
        )
        .bind(min_lat)
        .bind(max_lat)
        .bind(min_lon)
        .bind(max_lon)
        .fetch_all(self.pool.as_ref())
        .await?;

        // The box over-selects at its corners; the exact haversine cut
        // happens here.
        let mut matches: Vec<(Location, f64)> = rows
            .into_iter()
            .map(Location::from)
            .filter_map(|location| {
                let point = location.coordinates()?;
                let distance = center.distance_meters(&point);
                (distance <= radius_meters).then_some((location, distance))
            })
            .collect();

        matches.sort_by(|a, b| a.1.total_cmp(&b.1));
        matches.truncate(limit as usize);

        Ok(matches)
    }
}
