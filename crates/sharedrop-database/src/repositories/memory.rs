//! In-process share store.
//!
//! Holds shares in a `Vec` behind a `tokio::sync::RwLock`. Used for tests
//! and single-node development setups without PostgreSQL.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use sharedrop_core::result::AppResult;
use sharedrop_entity::share::{CreateShare, Share};

use crate::store::{ShareStore, window_start};

/// In-memory share repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryShareRepository {
    shares: Arc<RwLock<Vec<Share>>>,
}

impl MemoryShareRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an existing share record as-is, keeping its id and timestamp.
    pub async fn import(&self, share: Share) {
        self.shares.write().await.push(share);
    }

    /// Number of stored shares.
    pub async fn len(&self) -> usize {
        self.shares.read().await.len()
    }

    /// Whether the repository holds no shares.
    pub async fn is_empty(&self) -> bool {
        self.shares.read().await.is_empty()
    }
}

#[async_trait]
impl ShareStore for MemoryShareRepository {
    async fn create(&self, data: &CreateShare) -> AppResult<Share> {
        let share = Share {
            id: Uuid::new_v4(),
            origin_address: data.origin_address.clone(),
            content_type: data.content_type,
            content: data.content.clone(),
            created_at: Utc::now(),
        };
        self.shares.write().await.push(share.clone());
        Ok(share)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Share>> {
        let shares = self.shares.read().await;
        Ok(shares.iter().find(|s| s.id == id).cloned())
    }

    async fn find_latest_by_origin_within(
        &self,
        origin_address: &str,
        window: Duration,
    ) -> AppResult<Option<Share>> {
        let since = window_start(window)?;
        let shares = self.shares.read().await;

        // max_by_key keeps the last of equal keys, so on a timestamp tie the
        // later insert wins.
        Ok(shares
            .iter()
            .filter(|s| s.origin_address == origin_address && s.created_at > since)
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    async fn delete_all_by_origin(&self, origin_address: &str) -> AppResult<u64> {
        let mut shares = self.shares.write().await;
        let before = shares.len();
        shares.retain(|s| s.origin_address != origin_address);
        Ok((before - shares.len()) as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
