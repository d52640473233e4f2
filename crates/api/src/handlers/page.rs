//! Server-rendered HTML page: list, search, create, edit, toggle and delete.
//!
//! Mutating form posts redirect back to `/` so the browser re-fetches the
//! list; the page itself keeps no state between requests. Failures render
//! as an HTML error page rather than the JSON error body.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;

use promptbase_core::error::CoreError;
use promptbase_core::prompt::ENTITY_PROMPT;
use promptbase_core::types::DbId;
use promptbase_db::models::prompt::{CreatePrompt, UpdatePrompt};
use promptbase_db::repositories::PromptRepo;

use crate::error::PageResult;
use crate::page;
use crate::query::ListParams;
use crate::state::AppState;

/// GET / -- render the prompt list with the search/sort form.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> PageResult<impl IntoResponse> {
    let query = params.to_query()?;
    let items = PromptRepo::list(&state.pool, &query).await?;
    let total = PromptRepo::count(&state.pool).await?;
    Ok(Html(page::render_index(&items, total, &query)))
}

/// POST /prompts -- create from the HTML form.
pub async fn create_from_form(
    State(state): State<AppState>,
    Form(input): Form<CreatePrompt>,
) -> PageResult<Redirect> {
    PromptRepo::create(&state.pool, &input).await?;
    Ok(Redirect::to("/"))
}

/// GET /prompts/{id}/edit -- render the edit form for one prompt.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<impl IntoResponse> {
    let item = PromptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: ENTITY_PROMPT,
            id,
        })?;
    Ok(Html(page::render_edit(&item)))
}

/// POST /prompts/{id} -- update from the HTML edit form.
pub async fn update_from_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<UpdatePrompt>,
) -> PageResult<Redirect> {
    PromptRepo::update(&state.pool, id, &input).await?;
    Ok(Redirect::to("/"))
}

/// POST /prompts/{id}/favorite
pub async fn toggle_from_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Redirect> {
    PromptRepo::toggle_favorite(&state.pool, id).await?;
    Ok(Redirect::to("/"))
}

/// POST /prompts/{id}/delete
pub async fn delete_from_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Redirect> {
    PromptRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/"))
}
