//! Purchase ledger API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /transactions | GET | List transactions |
//! | /transactions | POST | Record a purchase (201) |
//! | /transactions/{id} | GET | Transaction by id |
//! | /transactions/{id} | DELETE | Remove a transaction (204) |
//! | /transactions/member/{memberId} | GET | Purchases of one member |

mod handler;

use axum::{Router, routing::get};

use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/transactions", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/member/{member_id}", get(handler::list_by_member))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
