mod common;

use std::sync::Arc;

use sqlx::PgPool;

use geodex::domain::entities::{LocationPatch, NewLocation};
use geodex::domain::geo::GeoPoint;
use geodex::domain::repositories::LocationRepository;
use geodex::infrastructure::persistence::PgLocationRepository;

fn repo(pool: PgPool) -> PgLocationRepository {
    PgLocationRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_create_and_find_by_id(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .create(NewLocation {
            name: Some("Central Park".to_string()),
            address: Some("New York, NY, USA".to_string()),
            latitude: Some(40.785091),
            longitude: Some(-73.968285),
        })
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name.as_deref(), Some("Central Park"));
    assert_eq!(found.latitude, Some(40.785091));
    assert_eq!(found.longitude, Some(-73.968285));
}

#[sqlx::test]
async fn test_create_without_coordinates(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .create(NewLocation {
            name: Some("Somewhere".to_string()),
            address: None,
            latitude: None,
            longitude: None,
        })
        .await
        .unwrap();

    assert!(created.latitude.is_none());
    assert!(created.longitude.is_none());
    assert!(created.coordinates().is_none());
}

#[sqlx::test]
async fn test_duplicate_name_is_conflict(pool: PgPool) {
    let repo = repo(pool);

    let input = NewLocation {
        name: Some("Central Park".to_string()),
        address: None,
        latitude: None,
        longitude: None,
    };

    repo.create(input.clone()).await.unwrap();
    let result = repo.create(input).await;

    assert!(matches!(
        result.unwrap_err(),
        geodex::AppError::Conflict { .. }
    ));
}

#[sqlx::test]
async fn test_find_by_id_missing(pool: PgPool) {
    let repo = repo(pool);
    assert!(repo.find_by_id(12345).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_newest_first(pool: PgPool) {
    let repo = repo(pool.clone());

    common::insert_location(&pool, "first", None, None, None).await;
    common::insert_location(&pool, "second", None, None, None).await;

    let items = repo.list(0, 10).await.unwrap();
    assert_eq!(items.len(), 2);
    // Same created_at timestamps tie-break on id, newest insert first.
    assert_eq!(items[0].name.as_deref(), Some("second"));
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_update_partial_fields(pool: PgPool) {
    let repo = repo(pool.clone());
    let id = common::insert_location(
        &pool,
        "Central Park",
        Some("New York, NY, USA"),
        Some(40.785091),
        Some(-73.968285),
    )
    .await;

    let updated = repo
        .update(
            id,
            LocationPatch {
                name: Some("The Park".to_string()),
                address: None,
                latitude: None,
                longitude: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name.as_deref(), Some("The Park"));
    // Untouched fields survive.
    assert_eq!(updated.address.as_deref(), Some("New York, NY, USA"));
    assert_eq!(updated.latitude, Some(40.785091));
}

#[sqlx::test]
async fn test_update_missing_is_not_found(pool: PgPool) {
    let repo = repo(pool);

    let result = repo.update(9999, LocationPatch::default()).await;
    assert!(matches!(
        result.unwrap_err(),
        geodex::AppError::NotFound { .. }
    ));
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let repo = repo(pool.clone());
    let id = common::insert_location(&pool, "gone", None, None, None).await;

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert_eq!(common::location_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_find_near_orders_by_distance(pool: PgPool) {
    let repo = repo(pool.clone());

    // Central Park, plus two Manhattan points at growing distance.
    common::insert_location(
        &pool,
        "Central Park",
        Some("New York, NY, USA"),
        Some(40.785091),
        Some(-73.968285),
    )
    .await;
    common::insert_location(&pool, "Museum Mile", None, Some(40.779437), Some(-73.963244)).await;
    common::insert_location(&pool, "Times Square", None, Some(40.758896), Some(-73.985130)).await;
    // Far away, must never match a Manhattan query.
    common::insert_location(&pool, "Eiffel Tower", None, Some(48.858370), Some(2.294481)).await;

    let center = GeoPoint {
        latitude: 40.785091,
        longitude: -73.968285,
    };

    let matches = repo.find_near(center, 5_000.0, 10).await.unwrap();

    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].0.name.as_deref(), Some("Central Park"));
    assert!(matches[0].1 < 1.0);
    assert_eq!(matches[1].0.name.as_deref(), Some("Museum Mile"));
    assert_eq!(matches[2].0.name.as_deref(), Some("Times Square"));
    assert!(matches[1].1 < matches[2].1);
}

#[sqlx::test]
async fn test_find_near_radius_cutoff(pool: PgPool) {
    let repo = repo(pool.clone());

    common::insert_location(
        &pool,
        "Central Park",
        None,
        Some(40.785091),
        Some(-73.968285),
    )
    .await;
    // Times Square is roughly 3.3 km away.
    common::insert_location(&pool, "Times Square", None, Some(40.758896), Some(-73.985130)).await;

    let center = GeoPoint {
        latitude: 40.785091,
        longitude: -73.968285,
    };

    let matches = repo.find_near(center, 1_000.0, 10).await.unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].0.name.as_deref(), Some("Central Park"));
}

#[sqlx::test]
async fn test_find_near_skips_records_without_coordinates(pool: PgPool) {
    let repo = repo(pool.clone());

    common::insert_location(&pool, "no-coords", Some("somewhere"), None, None).await;

    let center = GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    };

    let matches = repo.find_near(center, 1_000_000.0, 10).await.unwrap();
    assert!(matches.is_empty());
}

#[sqlx::test]
async fn test_find_near_spans_the_antimeridian(pool: PgPool) {
    let repo = repo(pool.clone());

    // Roughly 111 m apart, on opposite sides of the date line.
    common::insert_location(&pool, "west of the line", None, Some(0.0), Some(179.9995)).await;
    common::insert_location(&pool, "east of the line", None, Some(0.0), Some(-179.9995)).await;

    let center = GeoPoint {
        latitude: 0.0,
        longitude: 179.9995,
    };

    let matches = repo.find_near(center, 1_000.0, 10).await.unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].0.name.as_deref(), Some("west of the line"));
    assert_eq!(matches[1].0.name.as_deref(), Some("east of the line"));
    assert!(matches[1].1 < 1_000.0);
}

#[sqlx::test]
async fn test_find_near_respects_limit(pool: PgPool) {
    let repo = repo(pool.clone());

    common::insert_location(&pool, "a", None, Some(10.0), Some(10.0)).await;
    common::insert_location(&pool, "b", None, Some(10.001), Some(10.0)).await;
    common::insert_location(&pool, "c", None, Some(10.002), Some(10.0)).await;

    let center = GeoPoint {
        latitude: 10.0,
        longitude: 10.0,
    };

    let matches = repo.find_near(center, 10_000.0, 2).await.unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].0.name.as_deref(), Some("a"));
}
