use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use chirp_service::ServiceError;
use chirp_types::api::{CreateMessageRequest, UpdateMessageRequest};

use crate::AppState;
use crate::error::ApiError;

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let svc = state.messages.clone();
    let message = tokio::task::spawn_blocking(move || svc.create(req.posted_by, &req.message_text))
        .await
        .map_err(ApiError::from_join)??;

    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let svc = state.messages.clone();
    let messages = tokio::task::spawn_blocking(move || svc.get_all())
        .await
        .map_err(ApiError::from_join)??;

    Ok(Json(messages))
}

/// A missing id answers 404, never an empty 200 body.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let svc = state.messages.clone();
    let message = tokio::task::spawn_blocking(move || svc.get_by_id(message_id))
        .await
        .map_err(ApiError::from_join)??
        .ok_or(ServiceError::NotFound)?;

    Ok(Json(message))
}

/// Deleting an absent message is a no-op answered with 204, keeping the
/// operation idempotent end to end.
pub async fn delete(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, ApiError> {
    let svc = state.messages.clone();
    let deleted = tokio::task::spawn_blocking(move || svc.delete_by_id(message_id))
        .await
        .map_err(ApiError::from_join)??;

    Ok(match deleted {
        Some(message) => Json(message).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

pub async fn update(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    Json(req): Json<UpdateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let svc = state.messages.clone();
    let message = tokio::task::spawn_blocking(move || svc.update(message_id, &req.message_text))
        .await
        .map_err(ApiError::from_join)??;

    Ok(Json(message))
}
