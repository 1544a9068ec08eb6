//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sharedrop_core::config::app::ServerConfig;
use sharedrop_service::ShareService;

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// HTTP server settings.
    pub server: Arc<ServerConfig>,
    /// Share resolution service.
    pub share_service: Arc<ShareService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(server: ServerConfig, share_service: ShareService) -> Self {
        Self {
            server: Arc::new(server),
            share_service: Arc::new(share_service),
        }
    }
}
