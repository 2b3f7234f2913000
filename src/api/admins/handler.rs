//! Administrator API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, ApiResult, AppState};
use crate::types::{Admin, AdminInput};

/// Body of `POST /admin/login`
#[derive(Debug, Deserialize, Serialize)]
pub struct AdminLoginRequest {
    pub username: String,
}

/// Successful admin login lookup
///
/// No credential is checked: the lookup only proves an active administrator
/// holds the username.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
    pub admin: AdminSummary,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
}

impl From<Admin> for AdminSummary {
    fn from(admin: Admin) -> Self {
        AdminSummary {
            id: admin.id,
            username: admin.username,
            email: admin.email,
            full_name: admin.full_name,
            role: admin.role,
        }
    }
}

/// GET /admin
pub async fn list(State(state): State<AppState>) -> Json<Vec<Admin>> {
    Json(state.services.admins.find_all())
}

/// POST /admin
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AdminInput>,
) -> ApiResult<(StatusCode, Json<Admin>)> {
    let admin = state.services.admins.create(payload)?;
    Ok((StatusCode::CREATED, Json(admin)))
}

/// GET /admin/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Admin>> {
    Ok(Json(state.services.admins.find_by_id(&id)?))
}

/// PUT /admin/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AdminInput>,
) -> ApiResult<Json<Admin>> {
    Ok(Json(state.services.admins.update(&id, payload)?))
}

/// DELETE /admin/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.services.admins.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /admin/login
///
/// An unknown or inactive username is reported as 401 "Invalid username".
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> ApiResult<Json<AdminLoginResponse>> {
    let admin = state
        .services
        .admins
        .find_by_username(&payload.username)
        .map_err(|_| ApiError::unauthorized("Invalid username"))?;

    Ok(Json(AdminLoginResponse {
        success: true,
        message: "Login successful".to_string(),
        admin: AdminSummary::from(admin),
    }))
}
