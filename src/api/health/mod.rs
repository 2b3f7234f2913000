//! Health check routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Liveness check |
//! | /api/health | GET | Same check under the API prefix |
//! | / | GET | Service index listing the endpoints |
//!
//! ```json
//! {
//!   "status": "UP",
//!   "service": "GameZone Accounts",
//!   "version": "0.1.0",
//!   "timestamp": "2024-05-01T12:00:00Z"
//! }
//! ```

use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AppState;

pub const SERVICE_NAME: &str = "GameZone Accounts";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/health", get(health))
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "UP" while the process serves requests
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Service index response
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceIndex {
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

const ENDPOINTS: &[&str] = &[
    "GET /health",
    "GET /api/health",
    "GET|POST /members",
    "GET|PUT|DELETE /members/{id}",
    "POST /members/search",
    "POST /members/login",
    "GET|POST /admin",
    "GET|PUT|DELETE /admin/{id}",
    "POST /admin/login",
    "GET|POST /games",
    "GET|PUT|DELETE /games/{id}",
    "GET|POST /recharges",
    "GET|DELETE /recharges/{id}",
    "GET /recharges/member/{memberId}",
    "GET|POST /transactions",
    "GET|DELETE /transactions/{id}",
    "GET /transactions/member/{memberId}",
];

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn index() -> Json<ServiceIndex> {
    Json(ServiceIndex {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}
