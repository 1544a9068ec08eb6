//! Share code registration on top of the code cache.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use sharedrop_cache::keys;
use sharedrop_core::error::{AppError, ErrorKind};
use sharedrop_core::result::AppResult;
use sharedrop_core::traits::cache::CacheProvider;

use super::codes::CodeGenerator;

/// Maps short codes to share ids in the cache for a fixed TTL.
///
/// With `attempts == 1` registration is last-write-wins: a code drawn
/// twice within its TTL silently points at the newer share. With more
/// attempts, every attempt but the last claims the code only if it is
/// free and draws a new word otherwise; the last attempt overwrites.
#[derive(Debug, Clone)]
pub struct CodeRegistry {
    cache: Arc<dyn CacheProvider>,
    generator: CodeGenerator,
    ttl: Duration,
    attempts: u32,
}

impl CodeRegistry {
    /// Creates a new code registry.
    pub fn new(
        cache: Arc<dyn CacheProvider>,
        generator: CodeGenerator,
        ttl: Duration,
        attempts: u32,
    ) -> Self {
        Self {
            cache,
            generator,
            ttl,
            attempts: attempts.max(1),
        }
    }

    /// Draw a candidate code.
    pub fn generate(&self) -> String {
        self.generator.generate()
    }

    /// Register `code` for `share_id`, returning the code actually stored.
    pub async fn register(&self, code: String, share_id: Uuid) -> AppResult<String> {
        let value = share_id.to_string();
        let mut code = code;

        for attempt in 1..self.attempts {
            if self
                .cache
                .set_nx(&keys::share_code(&code), &value, self.ttl)
                .await?
            {
                return Ok(code);
            }
            debug!(code = %code, attempt, "Share code in use, drawing another");
            code = self.generator.generate();
        }

        self.cache
            .set(&keys::share_code(&code), &value, self.ttl)
            .await?;
        Ok(code)
    }

    /// The share id `code` points at, if the code is live.
    pub async fn resolve(&self, code: &str) -> AppResult<Option<Uuid>> {
        let Some(raw) = self.cache.get(&keys::share_code(code)).await? else {
            return Ok(None);
        };

        Uuid::parse_str(&raw).map(Some).map_err(|e| {
            AppError::with_source(
                ErrorKind::DataIntegrity,
                format!("Code '{code}' maps to malformed share id '{raw}'"),
                e,
            )
        })
    }
}
