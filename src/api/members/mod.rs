//! Member API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /members | GET | List members |
//! | /members | POST | Create a member (201) |
//! | /members/{id} | GET | Member by id |
//! | /members/{id} | PUT | Update a member |
//! | /members/{id} | DELETE | Delete a member (204) |
//! | /members/search | POST | Profile by phone number |
//! | /members/login | POST | Login lookup by email |

mod handler;

pub use handler::{LoginRequest, LoginResponse, LoginUser, SearchRequest};

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/members", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search", post(handler::search))
        .route("/login", post(handler::login))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
