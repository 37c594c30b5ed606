//! Database migration runner.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use chatgate_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::UpstreamFailure,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// A migration recorded in `_sqlx_migrations`.
#[derive(Debug, Clone)]
pub struct AppliedMigration {
    pub version: i64,
    pub description: String,
    pub installed_on: DateTime<Utc>,
    pub success: bool,
}

/// Migrations the database has recorded, oldest first. Empty when
/// migrations have never run.
pub async fn applied_migrations(pool: &PgPool) -> Result<Vec<AppliedMigration>, AppError> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = '_sqlx_migrations')",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::UpstreamFailure, "Failed to read migrations", e))?;

    if !table_exists {
        return Ok(Vec::new());
    }

    let rows: Vec<(i64, String, DateTime<Utc>, bool)> = sqlx::query_as(
        "SELECT version, description, installed_on, success FROM _sqlx_migrations ORDER BY version",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::UpstreamFailure, "Failed to read migrations", e))?;

    Ok(rows
        .into_iter()
        .map(|(version, description, installed_on, success)| AppliedMigration {
            version,
            description,
            installed_on,
            success,
        })
        .collect())
}
