//! Route definitions for prompts.
//!
//! Mounted at `/prompts` in the API route tree.
//!
//! ```text
//! GET    /                     list_prompts
//! POST   /                     create_prompt
//! GET    /{id}                 get_prompt
//! PUT    /{id}                 update_prompt
//! DELETE /{id}                 delete_prompt
//! POST   /{id}/toggle-favorite toggle_favorite
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::prompt;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompt::list_prompts).post(prompt::create_prompt))
        .route(
            "/{id}",
            get(prompt::get_prompt)
                .put(prompt::update_prompt)
                .delete(prompt::delete_prompt),
        )
        .route("/{id}/toggle-favorite", post(prompt::toggle_favorite))
}
