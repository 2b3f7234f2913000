//! Game catalog API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /games | GET | List games |
//! | /games | POST | Add a game (201) |
//! | /games/{id} | GET | Game by id |
//! | /games/{id} | PUT | Update a game |
//! | /games/{id} | DELETE | Remove a game (204) |

mod handler;

use axum::{Router, routing::get};

use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/games", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
