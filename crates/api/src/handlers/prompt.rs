//! JSON handlers for prompts.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use promptbase_core::error::CoreError;
use promptbase_core::prompt::ENTITY_PROMPT;
use promptbase_core::types::DbId;
use promptbase_db::models::prompt::{CreatePrompt, UpdatePrompt};
use promptbase_db::repositories::PromptRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /prompts
// ---------------------------------------------------------------------------

/// List prompts with optional search and ordering.
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.to_query()?;
    let items = PromptRepo::list(&state.pool, &query).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /prompts
// ---------------------------------------------------------------------------

/// Create a new prompt.
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(input): Json<CreatePrompt>,
) -> AppResult<impl IntoResponse> {
    let created = PromptRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /prompts/{id}
// ---------------------------------------------------------------------------

/// Get a single prompt by ID.
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let prompt = PromptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_PROMPT,
            id,
        }))?;
    Ok(Json(DataResponse { data: prompt }))
}

// ---------------------------------------------------------------------------
// PUT /prompts/{id}
// ---------------------------------------------------------------------------

/// Overwrite an existing prompt.
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrompt>,
) -> AppResult<impl IntoResponse> {
    let updated = PromptRepo::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// POST /prompts/{id}/toggle-favorite
// ---------------------------------------------------------------------------

/// Flip the favorite flag of a prompt.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let toggled = PromptRepo::toggle_favorite(&state.pool, id).await?;
    Ok(Json(DataResponse { data: toggled }))
}

// ---------------------------------------------------------------------------
// DELETE /prompts/{id}
// ---------------------------------------------------------------------------

/// Permanently delete a prompt.
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    PromptRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
