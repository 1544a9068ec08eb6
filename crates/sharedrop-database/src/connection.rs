//! PostgreSQL pool lifecycle for the share store.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{error, info};

use sharedrop_core::config::{DatabaseConfig, redact_url_credentials};
use sharedrop_core::error::{AppError, ErrorKind};
use sharedrop_core::result::AppResult;

use crate::repositories::ShareRepository;
use crate::store::ShareStore;

/// Connection pool behind the durable share store.
///
/// Owned by the binary: it connects once at startup, brings the schema
/// up to date, hands out the [`ShareStore`] the service runs on, and is
/// closed after the server drains.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connect to PostgreSQL using the pool limits from `config`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let url = redact_url_credentials(&config.url);
        info!(
            operation = "connect",
            url = %url,
            max_connections = config.max_connections,
            "Connecting share store"
        );

        let pool = pool_options(config)
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    "Failed to connect to the share store",
                    e,
                )
            })
            .inspect_err(|e| {
                error!(operation = "connect", url = %url, error = %e, "Share store unreachable");
            })?;

        Ok(Self { pool })
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> AppResult<()> {
        crate::migration::run_migrations(&self.pool).await
    }

    /// The PostgreSQL-backed share store sharing this pool.
    pub fn share_store(&self) -> Arc<dyn ShareStore> {
        Arc::new(ShareRepository::new(self.pool.clone()))
    }

    /// Close every connection; in-flight queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
        info!(operation = "close", "Share store pool closed");
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}
