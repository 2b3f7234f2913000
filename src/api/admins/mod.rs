//! Administrator API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /admin | GET | List administrators |
//! | /admin | POST | Create an administrator (201) |
//! | /admin/{id} | GET | Administrator by id |
//! | /admin/{id} | PUT | Update an administrator |
//! | /admin/{id} | DELETE | Delete an administrator (204) |
//! | /admin/login | POST | Login lookup by username |

mod handler;

pub use handler::{AdminLoginRequest, AdminLoginResponse, AdminSummary};

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/admin", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/login", post(handler::login))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
