//! Share creation and resolution flows.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use sharedrop_core::config::share::ShareConfig;
use sharedrop_core::error::AppError;
use sharedrop_core::result::AppResult;
use sharedrop_core::traits::cache::CacheProvider;
use sharedrop_core::traits::transfer::TransferUrlIssuer;
use sharedrop_database::ShareStore;
use sharedrop_entity::share::{CreateShare, Share, ShareContent, ShareContentType, ShareCreated};
use sharedrop_storage::object_key_for;

use super::codes::{CodeGenerator, normalize_code};
use super::registry::CodeRegistry;
use crate::context::RequestContext;

/// What the caller wants to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateShareRequest {
    /// Literal text.
    Text {
        /// The text payload. Must not be empty.
        content: String,
    },
    /// A file the caller will upload directly to storage.
    File {
        /// Client-side file name, used only to derive the object key.
        file_name: String,
    },
}

/// Reachability of the backends behind the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Share store answered.
    pub store: bool,
    /// Code cache answered.
    pub cache: bool,
}

impl HealthReport {
    /// Whether every backend is reachable.
    pub fn is_healthy(&self) -> bool {
        self.store && self.cache
    }
}

/// Creates shares and resolves them by code, by id, or by origin.
///
/// The service holds no mutable state of its own. Concurrent flows only
/// meet inside the store and the cache.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Durable share records.
    store: Arc<dyn ShareStore>,
    /// Raw cache handle, kept for health checks.
    cache: Arc<dyn CacheProvider>,
    /// Short code registration.
    codes: CodeRegistry,
    /// Signed transfer URLs.
    transfers: Arc<dyn TransferUrlIssuer>,
    /// How far back recall looks.
    recall_window: Duration,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        store: Arc<dyn ShareStore>,
        cache: Arc<dyn CacheProvider>,
        transfers: Arc<dyn TransferUrlIssuer>,
        generator: CodeGenerator,
        config: &ShareConfig,
    ) -> Self {
        let codes = CodeRegistry::new(
            Arc::clone(&cache),
            generator,
            config.code_ttl(),
            config.code_attempts,
        );
        Self {
            store,
            cache,
            codes,
            transfers,
            recall_window: config.recall_window(),
        }
    }

    /// Creates a share and registers a short code for it.
    ///
    /// For file shares the returned value carries a signed upload URL for
    /// the derived object key. If the share is stored but the code cannot
    /// be registered, the result is returned with `code: None`.
    pub async fn create_share(
        &self,
        ctx: &RequestContext,
        req: CreateShareRequest,
    ) -> AppResult<ShareCreated> {
        let code = self.codes.generate();

        let (data, upload_url) = match req {
            CreateShareRequest::Text { content } => {
                if content.is_empty() {
                    return Err(AppError::validation("Text content must not be empty"));
                }
                (CreateShare::text(&ctx.origin_address, content), None)
            }
            CreateShareRequest::File { file_name } => {
                let object_key = object_key_for(&file_name)?;
                let url = self
                    .transfers
                    .issue_upload_url(&object_key)
                    .await
                    .inspect_err(|e| {
                        error!(
                            operation = "create",
                            origin = %ctx.origin_address,
                            object_key = %object_key,
                            error = %e,
                            "Failed to sign upload URL"
                        );
                    })?;
                (CreateShare::file(&ctx.origin_address, object_key), Some(url))
            }
        };

        let share = self.store.create(&data).await.inspect_err(|e| {
            error!(
                operation = "create",
                origin = %ctx.origin_address,
                content_type = %data.content_type,
                error = %e,
                "Failed to store share"
            );
        })?;

        let code = match self.codes.register(code, share.id).await {
            Ok(code) => Some(code),
            Err(e) => {
                warn!(
                    operation = "create",
                    origin = %ctx.origin_address,
                    share_id = %share.id,
                    error = %e,
                    "Share stored but code registration failed"
                );
                None
            }
        };

        info!(
            share_id = %share.id,
            origin = %ctx.origin_address,
            content_type = %share.content_type,
            code = code.as_deref().unwrap_or("-"),
            "Share created"
        );

        Ok(ShareCreated {
            share,
            code,
            upload_url,
        })
    }

    /// Resolves a live code to its share.
    pub async fn get_by_code(&self, code: &str) -> AppResult<Share> {
        let code = normalize_code(code);
        if code.is_empty() {
            return Err(AppError::validation("Share code must not be empty"));
        }

        let share_id = self
            .codes
            .resolve(&code)
            .await
            .inspect_err(|e| {
                error!(operation = "get_by_code", code = %code, error = %e, "Failed to resolve code");
            })?
            .ok_or_else(|| {
                debug!(operation = "get_by_code", code = %code, "Code not found or expired");
                AppError::not_found("No active share for this code")
            })?;

        let share = self.store.find_by_id(share_id).await.inspect_err(|e| {
            error!(
                operation = "get_by_code",
                code = %code,
                share_id = %share_id,
                error = %e,
                "Failed to load share"
            );
        })?;

        share.ok_or_else(|| {
            error!(
                operation = "get_by_code",
                code = %code,
                share_id = %share_id,
                "Code resolves to a share that does not exist"
            );
            AppError::data_integrity(format!("Code '{code}' resolves to missing share {share_id}"))
        })
    }

    /// Returns the content of a share: the text itself, or a freshly
    /// signed download URL for a file.
    pub async fn get_content(&self, id: Uuid) -> AppResult<ShareContent> {
        let share = self
            .store
            .find_by_id(id)
            .await
            .inspect_err(|e| {
                error!(operation = "get_content", share_id = %id, error = %e, "Failed to load share");
            })?
            .ok_or_else(|| {
                debug!(operation = "get_content", share_id = %id, "Share not found");
                AppError::not_found("Share not found")
            })?;

        match share.content_type {
            ShareContentType::Text => Ok(ShareContent::Text {
                content: share.content,
            }),
            ShareContentType::File => {
                let url = self
                    .transfers
                    .issue_download_url(&share.content)
                    .await
                    .inspect_err(|e| {
                        error!(
                            operation = "get_content",
                            share_id = %id,
                            object_key = %share.content,
                            error = %e,
                            "Failed to sign download URL"
                        );
                    })?;
                Ok(ShareContent::File { url })
            }
        }
    }

    /// The newest share from the caller's origin inside the recall window.
    pub async fn recall_latest(&self, ctx: &RequestContext) -> AppResult<Share> {
        self.store
            .find_latest_by_origin_within(&ctx.origin_address, self.recall_window)
            .await
            .inspect_err(|e| {
                error!(
                    operation = "recall",
                    origin = %ctx.origin_address,
                    error = %e,
                    "Failed to recall share"
                );
            })?
            .ok_or_else(|| {
                debug!(operation = "recall", origin = %ctx.origin_address, "Nothing to recall");
                AppError::not_found("No recent share from this address")
            })
    }

    /// Deletes every share from the caller's origin.
    ///
    /// Codes already handed out keep resolving until they expire; a lookup
    /// through one of them after the purge reports a data-integrity error.
    pub async fn purge(&self, ctx: &RequestContext) -> AppResult<u64> {
        let removed = self
            .store
            .delete_all_by_origin(&ctx.origin_address)
            .await
            .inspect_err(|e| {
                error!(
                    operation = "purge",
                    origin = %ctx.origin_address,
                    error = %e,
                    "Failed to purge shares"
                );
            })?;

        info!(origin = %ctx.origin_address, removed, "Shares purged");
        Ok(removed)
    }

    /// Probe the store and the cache.
    pub async fn health(&self) -> HealthReport {
        let store = self.store.health_check().await.unwrap_or_else(|e| {
            warn!(error = %e, "Share store health check failed");
            false
        });
        let cache = self.cache.health_check().await.unwrap_or_else(|e| {
            warn!(error = %e, "Code cache health check failed");
            false
        });
        HealthReport { store, cache }
    }
}
