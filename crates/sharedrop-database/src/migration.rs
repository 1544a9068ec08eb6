//! Embedded schema migrations for the `shares` table.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::{error, info};

use sharedrop_core::error::{AppError, ErrorKind};
use sharedrop_core::result::AppResult;

/// Migrations compiled in from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the share store schema up to date.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    let known = MIGRATOR.iter().count();
    info!(operation = "migrate", known, "Applying share store migrations");

    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                "Failed to apply share store migrations",
                e,
            )
        })
        .inspect_err(|e| error!(operation = "migrate", error = %e, "Migration failed"))?;

    info!(operation = "migrate", "Share store schema is current");
    Ok(())
}
