use anyhow::{Context as _, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connects to the database named by the `DATABASE_URL` environment variable.
pub async fn connect() -> Result<PgPool> {
    dotenv::dotenv().ok();
    let db_url = std::env::var("DATABASE_URL").context("No database URL provided")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .context("Failed to connect to the database")?;
    tracing::info!("Connected to the database");

    Ok(pool)
}

/// Applies any pending migrations from the `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!()
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database schema is up to date");

    Ok(())
}
