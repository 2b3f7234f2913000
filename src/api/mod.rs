//! HTTP boundary
//!
//! # Structure
//!
//! - [`health`] - Health checks and the service index
//! - [`admins`] - Administrator accounts and the admin login lookup
//! - [`members`] - Member accounts, profile search and login lookup
//! - [`games`] - Game catalog
//! - [`recharges`] - Recharge ledger
//! - [`transactions`] - Purchase ledger
//!
//! Handlers translate requests into service calls; [`error`] maps service
//! failures to status codes.

pub mod admins;
pub mod error;
pub mod games;
pub mod health;
pub mod members;
pub mod recharges;
pub mod state;
pub mod transactions;

pub use error::{ApiError, ApiMessage, ApiResult};
pub use state::AppState;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Router with every route registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(admins::router())
        .merge(members::router())
        .merge(games::router())
        .merge(recharges::router())
        .merge(transactions::router())
}

/// Fully configured application, used by the server and by oneshot tests
pub fn build_app(state: AppState) -> Router {
    build_router()
        // CORS - the dashboard is served from another origin
        .layer(CorsLayer::permissive())
        // Trace - request logging at INFO
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
