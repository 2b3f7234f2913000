//! Member API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, ApiResult, AppState};
use crate::types::{Member, MemberInput, MemberProfile};

/// Body of `POST /members/search`
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchRequest {
    pub phone: String,
}

/// Body of `POST /members/login`
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Successful login lookup
///
/// No credential is checked: the lookup only proves the email is registered.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub balance: Decimal,
    pub role: String,
}

impl From<Member> for LoginUser {
    fn from(member: Member) -> Self {
        LoginUser {
            id: member.id,
            name: member.name,
            email: member.email,
            phone_number: member.phone_number,
            balance: member.balance,
            role: member.role,
        }
    }
}

/// GET /members
pub async fn list(State(state): State<AppState>) -> Json<Vec<Member>> {
    Json(state.services.members.find_all())
}

/// POST /members
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MemberInput>,
) -> ApiResult<(StatusCode, Json<Member>)> {
    let member = state.services.members.create(payload)?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Member>> {
    Ok(Json(state.services.members.find_by_id(&id)?))
}

/// PUT /members/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberInput>,
) -> ApiResult<Json<Member>> {
    Ok(Json(state.services.members.update(&id, payload)?))
}

/// DELETE /members/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.services.members.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /members/search
pub async fn search(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> ApiResult<Json<MemberProfile>> {
    Ok(Json(
        state
            .services
            .profiles
            .member_profile_by_phone(&payload.phone)?,
    ))
}

/// POST /members/login
///
/// Any lookup failure is reported as 401 "Invalid email".
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let member = state
        .services
        .members
        .find_by_email(&payload.email)
        .map_err(|_| ApiError::unauthorized("Invalid email"))?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: LoginUser::from(member),
    }))
}
