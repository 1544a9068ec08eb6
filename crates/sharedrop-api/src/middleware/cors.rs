//! CORS layer configuration.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the share routes; they carry no credentials.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}
