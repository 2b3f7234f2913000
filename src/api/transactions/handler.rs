use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{ApiResult, AppState};
use crate::types::{Transaction, TransactionInput};

/// GET /transactions
pub async fn list(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    Json(state.services.transactions.find_all())
}

/// POST /transactions
///
/// The purchase is recorded as submitted; the member's balance is not debited.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TransactionInput>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let transaction = state.services.transactions.create(payload)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /transactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(state.services.transactions.find_by_id(&id)?))
}

/// GET /transactions/member/{memberId}
pub async fn list_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Json<Vec<Transaction>> {
    Json(state.services.transactions.find_by_member_id(&member_id))
}

/// DELETE /transactions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.services.transactions.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
