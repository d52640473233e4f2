pub mod health;
pub mod page;
pub mod prompt;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prompts                                 list, create
/// /prompts/{id}                            get, update, delete
/// /prompts/{id}/toggle-favorite            toggle favorite (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/prompts", prompt::router())
}
