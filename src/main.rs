//! ShareDrop Server: ephemeral text and file sharing by short code
//!
//! Main entry point that wires all crates together and starts the server.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use sharedrop_api::AppState;
use sharedrop_cache::CacheManager;
use sharedrop_core::config::AppConfig;
use sharedrop_core::error::{AppError, ErrorKind};
use sharedrop_database::DatabasePool;
use sharedrop_service::{CodeGenerator, ShareService};
use sharedrop_storage::S3TransferIssuer;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(kind = %e.kind, error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SHAREDROP_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ShareDrop v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = DatabasePool::connect(&config.database).await?;
    db_pool.migrate().await?;

    // ── Step 2: Code cache ───────────────────────────────────────
    tracing::info!(provider = %config.cache.provider, "Initializing code cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    // ── Step 3: Transfer URL issuer ──────────────────────────────
    let transfers = Arc::new(S3TransferIssuer::new(&config.storage.s3).await?);

    // ── Step 4: Code vocabulary ──────────────────────────────────
    let generator = CodeGenerator::load(&config.share.word_list_path).await?;

    // ── Step 5: Share service ────────────────────────────────────
    let share_service = ShareService::new(
        db_pool.share_store(),
        cache,
        transfers,
        generator,
        &config.share,
    );

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app = sharedrop_api::build_router(AppState::new(config.server.clone(), share_service));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, format!("Failed to bind {addr}"), e)
    })?;

    tracing::info!(%addr, "ShareDrop server listening");

    // ── Step 7: Graceful shutdown ────────────────────────────────
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    })
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    db_pool.close().await;
    tracing::info!("ShareDrop server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
