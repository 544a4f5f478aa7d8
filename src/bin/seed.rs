//! Seed tool populating example locations.
//!
//! Idempotent: existing rows are updated in place, keyed by name, so the
//! tool can run at any point in every environment.
//!
//! # Usage
//!
//! ```bash
//! # Upsert the example locations
//! cargo run --bin seed
//!
//! # Wipe the table first (asks for confirmation)
//! cargo run --bin seed -- --truncate
//!
//! # Non-interactive wipe
//! cargo run --bin seed -- --truncate --yes
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// Seed tool for geodex.
#[derive(Parser)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Delete all existing locations before seeding
    #[arg(long)]
    truncate: bool,

    /// Skip the confirmation prompt for --truncate
    #[arg(long)]
    yes: bool,
}

/// Example locations with pre-resolved coordinates. Seeding bypasses the
/// geocoding provider so it works offline and respects usage policies.
const SEED_LOCATIONS: [(&str, &str, f64, f64); 5] = [
    ("Central Park", "New York, NY, USA", 40.785091, -73.968285),
    (
        "Eiffel Tower",
        "Champ de Mars, Paris, France",
        48.858370,
        2.294481,
    ),
    (
        "Sydney Opera House",
        "Bennelong Point, Sydney NSW, Australia",
        -33.856784,
        151.215297,
    ),
    (
        "Wawel Castle",
        "Wawel 5, 31-001 Kraków, Poland",
        50.054383,
        19.936180,
    ),
    (
        "Tokyo Tower",
        "4 Chome-2-8 Shibakoen, Minato City, Tokyo, Japan",
        35.658581,
        139.745433,
    ),
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    if cli.truncate {
        let confirmed = cli.yes
            || Confirm::new()
                .with_prompt("Delete ALL existing locations?")
                .default(false)
                .interact()?;

        if !confirmed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }

        let result = sqlx::query("DELETE FROM locations").execute(&pool).await?;
        println!(
            "{} {} existing locations removed",
            "✓".green(),
            result.rows_affected()
        );
    }

    println!("{}", "Seeding example locations 📍".bold());

    for (name, address, latitude, longitude) in SEED_LOCATIONS {
        sqlx::query(
            r#"
            INSERT INTO locations (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO UPDATE SET
                address    = EXCLUDED.address,
                latitude   = EXCLUDED.latitude,
                longitude  = EXCLUDED.longitude,
                updated_at = now()
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(latitude)
        .bind(longitude)
        .execute(&pool)
        .await
        .with_context(|| format!("Failed to seed '{name}'"))?;

        println!("  {} {} ({}, {})", "✓".green(), name.bold(), latitude, longitude);
    }

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
        .fetch_one(&pool)
        .await?;

    println!("{} {} locations in the directory", "Done.".green().bold(), total);

    Ok(())
}
