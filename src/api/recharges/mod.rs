//! Recharge ledger API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /recharges | GET | List recharges |
//! | /recharges | POST | Record a recharge (201) |
//! | /recharges/{id} | GET | Recharge by id |
//! | /recharges/{id} | DELETE | Remove a recharge (204) |
//! | /recharges/member/{memberId} | GET | Recharges of one member |
//!
//! Recording a recharge does not change the member's balance.

mod handler;

use axum::{Router, routing::get};

use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/recharges", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/member/{member_id}", get(handler::list_by_member))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
