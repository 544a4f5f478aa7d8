//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, geocoder setup, and Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::LocationService;
use crate::config::Config;
use crate::infrastructure::geocoding::NominatimGeocoder;
use crate::infrastructure::persistence::PgLocationRepository;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Nominatim geocoder client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The geocoder client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let geocoder = NominatimGeocoder::new(
        &config.geocoder_url,
        &config.geocoder_user_agent,
        Duration::from_secs(config.geocoder_timeout),
    )
    .map_err(|e| anyhow::anyhow!("Failed to build geocoder client: {e}"))?;
    tracing::info!("Geocoder: {}", config.geocoder_url);

    let pool = Arc::new(pool);
    let location_repository = Arc::new(PgLocationRepository::new(pool.clone()));
    let location_service = Arc::new(LocationService::new(
        location_repository,
        Arc::new(geocoder),
    ));

    let state = AppState::new(location_service, pool, config.geocoder_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
