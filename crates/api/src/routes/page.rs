//! Root-level routes for the server-rendered page.
//!
//! ```text
//! GET    /                        index
//! POST   /prompts                 create_from_form
//! GET    /prompts/{id}/edit       edit_form
//! POST   /prompts/{id}            update_from_form
//! POST   /prompts/{id}/favorite   toggle_from_form
//! POST   /prompts/{id}/delete     delete_from_form
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::page;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::index))
        .route("/prompts", post(page::create_from_form))
        .route("/prompts/{id}", post(page::update_from_form))
        .route("/prompts/{id}/edit", get(page::edit_form))
        .route("/prompts/{id}/favorite", post(page::toggle_from_form))
        .route("/prompts/{id}/delete", post(page::delete_from_form))
}
