//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiEnvelope, HealthResponse};
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiEnvelope<HealthResponse>>) {
    let report = state.share_service.health().await;
    let healthy = report.is_healthy();

    let body = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: report.store,
        cache: report.cache,
    };

    if healthy {
        (StatusCode::OK, Json(ApiEnvelope::ok(body)))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(ApiEnvelope::failed(body)))
    }
}
