//! The durable share store seam.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use sharedrop_core::error::AppError;
use sharedrop_core::result::AppResult;
use sharedrop_entity::share::{CreateShare, Share};

/// Durable share storage.
///
/// Lookups return `Ok(None)` for "nothing there"; the error channel is
/// reserved for backend failures (`StoreUnavailable`). Implementations
/// serialize their own writes.
#[async_trait]
pub trait ShareStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a share, assigning its `id` and `created_at`.
    async fn create(&self, data: &CreateShare) -> AppResult<Share>;

    /// Point lookup by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Share>>;

    /// The newest share for `origin_address` created within `window` of now.
    async fn find_latest_by_origin_within(
        &self,
        origin_address: &str,
        window: Duration,
    ) -> AppResult<Option<Share>>;

    /// Remove every share for `origin_address`, returning how many went.
    async fn delete_all_by_origin(&self, origin_address: &str) -> AppResult<u64>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Oldest `created_at` (exclusive) that still falls inside `window`.
pub(crate) fn window_start(window: Duration) -> AppResult<DateTime<Utc>> {
    TimeDelta::from_std(window)
        .ok()
        .and_then(|delta| Utc::now().checked_sub_signed(delta))
        .ok_or_else(|| AppError::internal(format!("Recall window {window:?} is out of range")))
}
