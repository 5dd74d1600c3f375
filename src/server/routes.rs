use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};

use super::structured_error::ApiError;
use super::AppState;
use crate::item::{Item, ItemKind, ItemListing, Submission};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub(super) async fn list_all(State(state): State<AppState>) -> Result<Json<ItemListing>, ApiError> {
    Ok(Json(state.service.list_all().await?))
}

pub(super) async fn list_lost(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.service.list_lost().await?))
}

pub(super) async fn list_found(
    State(state): State<AppState>,
) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.service.list_found().await?))
}

pub(super) async fn create_lost(
    State(state): State<AppState>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    create(&state, ItemKind::Lost, payload).await
}

pub(super) async fn create_found(
    State(state): State<AppState>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    create(&state, ItemKind::Found, payload).await
}

async fn create(
    state: &AppState,
    kind: ItemKind,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(submission) = payload?;
    let item = state.service.create(kind, &submission).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
