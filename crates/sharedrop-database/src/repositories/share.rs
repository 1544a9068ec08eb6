//! PostgreSQL share repository.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use sharedrop_core::error::{AppError, ErrorKind};
use sharedrop_core::result::AppResult;
use sharedrop_entity::share::{CreateShare, Share};

use crate::store::{ShareStore, window_start};

/// Repository for share create, lookup, recall and purge operations.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    pool: PgPool,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareStore for ShareRepository {
    async fn create(&self, data: &CreateShare) -> AppResult<Share> {
        sqlx::query_as::<_, Share>(
            "INSERT INTO shares (origin_address, content_type, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.origin_address)
        .bind(data.content_type)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::StoreUnavailable, "Failed to create share", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Share>> {
        sqlx::query_as::<_, Share>("SELECT * FROM shares WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::StoreUnavailable, "Failed to find share", e))
    }

    async fn find_latest_by_origin_within(
        &self,
        origin_address: &str,
        window: Duration,
    ) -> AppResult<Option<Share>> {
        let since = window_start(window)?;

        sqlx::query_as::<_, Share>(
            "SELECT * FROM shares WHERE origin_address = $1 AND created_at > $2 \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(origin_address)
        .bind(since)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                "Failed to find latest share by origin",
                e,
            )
        })
    }

    async fn delete_all_by_origin(&self, origin_address: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM shares WHERE origin_address = $1")
            .bind(origin_address)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreUnavailable, "Failed to delete shares", e)
            })?;
        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::StoreUnavailable, "Health check failed", e))
    }
}
