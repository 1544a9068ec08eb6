//! Shared test helpers for integration tests.
//!
//! Everything runs in-process: shares live in `MemoryShareRepository`,
//! codes in the moka-backed `MemoryCacheProvider`, and URLs are signed
//! offline by a real `S3TransferIssuer` with static credentials.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use sharedrop_api::AppState;
use sharedrop_cache::CacheManager;
use sharedrop_cache::memory::MemoryCacheProvider;
use sharedrop_core::config::app::ServerConfig;
use sharedrop_core::config::cache::MemoryCacheConfig;
use sharedrop_core::config::share::ShareConfig;
use sharedrop_core::config::storage::S3StorageConfig;
use sharedrop_core::error::AppError;
use sharedrop_core::result::AppResult;
use sharedrop_core::traits::cache::CacheProvider;
use sharedrop_database::{MemoryShareRepository, ShareStore};
use sharedrop_entity::share::{CreateShare, Share};
use sharedrop_service::{CodeGenerator, ShareService};
use sharedrop_storage::S3TransferIssuer;

/// Vocabulary used unless a test supplies its own.
pub const TEST_WORDS: &[&str] = &[
    "amber", "basil", "cedar", "delta", "ember", "fjord", "garnet", "harbor", "indigo", "juniper",
    "kayak", "lagoon", "maple", "nectar", "otter", "pebble", "quartz", "raven", "sierra", "tundra",
];

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The service behind the router
    pub service: Arc<ShareService>,
    /// Share store, for seeding and inspection
    pub store: Arc<MemoryShareRepository>,
    /// Code cache, for seeding and inspection
    pub cache: Arc<dyn CacheProvider>,
}

impl TestApp {
    /// Create a new test application with default share policy
    pub async fn new() -> Self {
        Self::build(ShareConfig::default(), TEST_WORDS).await
    }

    /// Create a test application with a custom share policy and vocabulary
    pub async fn build(share: ShareConfig, words: &[&str]) -> Self {
        let store = Arc::new(MemoryShareRepository::new());
        let cache = memory_cache();
        let transfers = Arc::new(s3_issuer().await);
        let generator =
            CodeGenerator::from_words(words.iter().copied()).expect("Failed to build vocabulary");

        let service = Arc::new(ShareService::new(
            store.clone(),
            Arc::clone(&cache),
            transfers,
            generator,
            &share,
        ));

        Self {
            router: router_for(Arc::clone(&service)),
            service,
            store,
            cache,
        }
    }

    /// Send a request to the router, attributing it to `origin` via
    /// `X-Forwarded-For`.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        origin: Option<&str>,
    ) -> TestResponse {
        send(&self.router, method, path, body, origin).await
    }
}

/// Router over an existing service with default server settings.
pub fn router_for(service: Arc<ShareService>) -> Router {
    sharedrop_api::build_router(AppState {
        server: Arc::new(ServerConfig::default()),
        share_service: service,
    })
}

/// Router whose service runs on the given store and cache.
pub async fn router_with(store: Arc<dyn ShareStore>, cache: Arc<dyn CacheProvider>) -> Router {
    let generator =
        CodeGenerator::from_words(TEST_WORDS.iter().copied()).expect("Failed to build vocabulary");
    let service = ShareService::new(
        store,
        cache,
        Arc::new(s3_issuer().await),
        generator,
        &ShareConfig::default(),
    );
    router_for(Arc::new(service))
}

/// Send a request through `router`, attributing it to `origin` via
/// `X-Forwarded-For`.
pub async fn send(
    router: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    origin: Option<&str>,
) -> TestResponse {
    let body_str = body
        .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
        .unwrap_or_default();

    let mut req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");

    if let Some(origin) = origin {
        req = req.header("X-Forwarded-For", origin);
    }

    let req = req
        .body(Body::from(body_str))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// An issuer that signs against a fake bucket without network access.
pub async fn s3_issuer() -> S3TransferIssuer {
    let config = S3StorageConfig {
        bucket: "sharedrop-test".to_string(),
        region: "us-east-1".to_string(),
        access_key: "AKIDEXAMPLE".to_string(),
        secret_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
        ..S3StorageConfig::default()
    };
    S3TransferIssuer::new(&config)
        .await
        .expect("Failed to build S3 issuer")
}

/// A fresh moka-backed code cache.
pub fn memory_cache() -> Arc<dyn CacheProvider> {
    Arc::new(CacheManager::from_provider(Arc::new(
        MemoryCacheProvider::new(&MemoryCacheConfig::default()),
    )))
}

/// Share store whose backend is unreachable.
#[derive(Debug)]
pub struct DownStore;

#[async_trait]
impl ShareStore for DownStore {
    async fn create(&self, _data: &CreateShare) -> AppResult<Share> {
        Err(AppError::store("connection refused at 10.0.0.3:5432"))
    }

    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Share>> {
        Err(AppError::store("connection refused at 10.0.0.3:5432"))
    }

    async fn find_latest_by_origin_within(
        &self,
        _origin_address: &str,
        _window: Duration,
    ) -> AppResult<Option<Share>> {
        Err(AppError::store("connection refused at 10.0.0.3:5432"))
    }

    async fn delete_all_by_origin(&self, _origin_address: &str) -> AppResult<u64> {
        Err(AppError::store("connection refused at 10.0.0.3:5432"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::store("connection refused at 10.0.0.3:5432"))
    }
}

/// Code cache whose backend is unreachable.
#[derive(Debug)]
pub struct DownCache;

#[async_trait]
impl CacheProvider for DownCache {
    async fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::cache("redis timeout"))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> AppResult<()> {
        Err(AppError::cache("redis timeout"))
    }

    async fn set_nx(&self, _key: &str, _value: &str, _ttl: Duration) -> AppResult<bool> {
        Err(AppError::cache("redis timeout"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::cache("redis timeout"))
    }
}
