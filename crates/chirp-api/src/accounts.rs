use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use chirp_types::api::{LoginRequest, RegisterRequest};

use crate::AppState;
use crate::error::ApiError;

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Run blocking DB work off the async runtime
    let svc = state.accounts.clone();
    let account = tokio::task::spawn_blocking(move || svc.register(&req.username, &req.password))
        .await
        .map_err(ApiError::from_join)??;

    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let svc = state.accounts.clone();
    let account = tokio::task::spawn_blocking(move || svc.login(&req.username, &req.password))
        .await
        .map_err(ApiError::from_join)??;

    Ok(Json(account))
}

/// GET /accounts/{account_id}/messages. An unknown account yields an
/// empty list, not an error.
pub async fn messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let svc = state.messages.clone();
    let messages = tokio::task::spawn_blocking(move || svc.get_by_author(account_id))
        .await
        .map_err(ApiError::from_join)??;

    Ok(Json(messages))
}
