//! Handlers for the `/tracks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracklist_core::types::DbId;
use tracklist_db::models::track::{CreateTrack, UpdateTrack};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

const ENTITY: &str = "Track";

/// GET /tracks/
///
/// List every track.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tracks = state.store.list().await?;
    Ok(Json(tracks))
}

/// GET /tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let track = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(track))
}

/// POST /tracks/
///
/// Create a track. Any `id` in the body is ignored; the store assigns one.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTrack>,
) -> AppResult<impl IntoResponse> {
    let track = state.store.create(&input).await?;
    tracing::info!(id = track.id, "Track created");
    Ok((StatusCode::CREATED, Json(track)))
}

/// PUT /tracks/{id}
///
/// Partial update: fields missing from the body keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTrack>,
) -> AppResult<impl IntoResponse> {
    let track = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(track))
}

/// DELETE /tracks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if state.store.delete(id).await? {
        tracing::info!(id, "Track deleted");
        Ok(StatusCode::OK)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
