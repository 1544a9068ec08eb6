//! Share creation and resolution handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};

use sharedrop_core::error::AppError;
use sharedrop_entity::share::{Share, ShareContent};
use sharedrop_service::CreateShareRequest;

use crate::dto::request::{CodeQuery, CreateShareBody};
use crate::dto::response::{ApiEnvelope, CreateShareResponse, PurgeResponse};
use crate::error::ApiError;
use crate::extractors::{ClientOrigin, parse_uuid};
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiEnvelope<T>>, ApiError>;

/// POST /share
pub async fn create_share(
    State(state): State<AppState>,
    origin: ClientOrigin,
    body: Result<Json<CreateShareBody>, JsonRejection>,
) -> ApiResult<CreateShareResponse> {
    let Json(body) = body.map_err(|e| AppError::validation(e.body_text()))?;
    let req = CreateShareRequest::try_from(body)?;

    let created = state
        .share_service
        .create_share(&origin.context(), req)
        .await?;

    Ok(Json(ApiEnvelope::ok(created.into())))
}

/// GET /share/code?code=
pub async fn get_by_code(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> ApiResult<Share> {
    let code = query.code.unwrap_or_default();
    let share = state.share_service.get_by_code(&code).await?;
    Ok(Json(ApiEnvelope::ok(share)))
}

/// GET /share/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ShareContent> {
    let id = parse_uuid(&id)?;
    let content = state.share_service.get_content(id).await?;
    Ok(Json(ApiEnvelope::ok(content)))
}

/// GET /share/ip
pub async fn recall_latest(
    State(state): State<AppState>,
    origin: ClientOrigin,
) -> ApiResult<Share> {
    let share = state.share_service.recall_latest(&origin.context()).await?;
    Ok(Json(ApiEnvelope::ok(share)))
}

/// DELETE /share
pub async fn purge(State(state): State<AppState>, origin: ClientOrigin) -> ApiResult<PurgeResponse> {
    let count = state.share_service.purge(&origin.context()).await?;
    Ok(Json(ApiEnvelope::ok(PurgeResponse { count })))
}
