//! Route definitions for the ShareDrop HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor. Serve it with
//! `into_make_service_with_connect_info::<SocketAddr>()` so origin
//! extraction can fall back to the peer address.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(share_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Share creation, lookup, recall and purge
fn share_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/share",
            post(handlers::share::create_share).delete(handlers::share::purge),
        )
        .route("/share/code", get(handlers::share::get_by_code))
        .route("/share/id/{id}", get(handlers::share::get_by_id))
        .route("/share/ip", get(handlers::share::recall_latest))
}

/// Liveness and backend reachability
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
