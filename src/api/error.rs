//! HTTP error mapping
//!
//! The only place a [`ServiceError`] becomes a status code:
//!
//! | Kind | Status |
//! |------|--------|
//! | NotFound | 404 |
//! | BusinessRule | 400 |
//!
//! Both are rendered as an [`ApiMessage`] body `{ "success": false, "message": ... }`.

use crate::types::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Handler result
pub type ApiResult<T> = Result<T, ApiError>;

/// Outcome body for failures and message-only replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiMessage {
            success: false,
            message: message.into(),
        }
    }
}

/// Error returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Login lookup failed (401)
    #[error("{0}")]
    Unauthorized(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::BusinessRule(_)) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ApiMessage::failure(self.to_string()))).into_response()
    }
}
