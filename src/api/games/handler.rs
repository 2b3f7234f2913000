//! Game catalog handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{ApiResult, AppState};
use crate::types::{Game, GameInput};

/// GET /games
pub async fn list(State(state): State<AppState>) -> Json<Vec<Game>> {
    Json(state.services.games.find_all())
}

/// POST /games
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<GameInput>,
) -> ApiResult<(StatusCode, Json<Game>)> {
    let game = state.services.games.create(payload)?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Game>> {
    Ok(Json(state.services.games.find_by_id(&id)?))
}

/// PUT /games/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GameInput>,
) -> ApiResult<Json<Game>> {
    Ok(Json(state.services.games.update(&id, payload)?))
}

/// DELETE /games/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.services.games.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
