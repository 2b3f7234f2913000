use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{ApiResult, AppState};
use crate::types::{Recharge, RechargeInput};

/// GET /recharges
pub async fn list(State(state): State<AppState>) -> Json<Vec<Recharge>> {
    Json(state.services.recharges.find_all())
}

/// POST /recharges
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<RechargeInput>,
) -> ApiResult<(StatusCode, Json<Recharge>)> {
    let recharge = state.services.recharges.create(payload)?;
    Ok((StatusCode::CREATED, Json(recharge)))
}

/// GET /recharges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Recharge>> {
    Ok(Json(state.services.recharges.find_by_id(&id)?))
}

/// GET /recharges/member/{memberId}
pub async fn list_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Json<Vec<Recharge>> {
    Json(state.services.recharges.find_by_member_id(&member_id))
}

/// DELETE /recharges/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.services.recharges.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
