//! Repository for the `prompts` table.

use promptbase_core::error::CoreError;
use promptbase_core::prompt::{normalize_activity, search_pattern, ListQuery, ENTITY_PROMPT};
use promptbase_core::types::DbId;
use sqlx::PgPool;

use crate::classify_sqlx_error;
use crate::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};

/// Column list for prompts queries.
const COLUMNS: &str = "id, title, prompt, genre, activity, is_favorite, created_at, updated_at";

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_PROMPT,
        id,
    }
}

/// Provides CRUD operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt. Returns the storage-assigned id.
    pub async fn insert(pool: &PgPool, input: &CreatePrompt) -> Result<DbId, CoreError> {
        input.validate()?;
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO prompts (title, prompt, genre, activity)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.prompt)
        .bind(&input.genre)
        .bind(normalize_activity(input.activity.as_deref()))
        .fetch_one(pool)
        .await
        .map_err(classify_sqlx_error)?;
        tracing::info!(id, "Prompt inserted");
        Ok(id)
    }

    /// Insert a new prompt. Returns the created row.
    pub async fn create(pool: &PgPool, input: &CreatePrompt) -> Result<Prompt, CoreError> {
        input.validate()?;
        let query = format!(
            "INSERT INTO prompts (title, prompt, genre, activity)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.title)
            .bind(&input.prompt)
            .bind(&input.genre)
            .bind(normalize_activity(input.activity.as_deref()))
            .fetch_one(pool)
            .await
            .map_err(classify_sqlx_error)?;
        tracing::info!(id = created.id, title = %created.title, "Prompt created");
        Ok(created)
    }

    /// Find a prompt by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prompt>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(classify_sqlx_error)
    }

    /// List prompts, optionally filtered by a case-insensitive substring of
    /// the title or body, in the requested order.
    pub async fn list(pool: &PgPool, params: &ListQuery) -> Result<Vec<Prompt>, CoreError> {
        let order = params.sort.order_clause(params.direction);

        let result = if let Some(pattern) = search_pattern(params.search.as_deref()) {
            let query = format!(
                "SELECT {COLUMNS} FROM prompts
                 WHERE title ILIKE $1 OR prompt ILIKE $1
                 ORDER BY {order}"
            );
            sqlx::query_as::<_, Prompt>(&query)
                .bind(&pattern)
                .fetch_all(pool)
                .await
        } else {
            let query = format!("SELECT {COLUMNS} FROM prompts ORDER BY {order}");
            sqlx::query_as::<_, Prompt>(&query).fetch_all(pool).await
        };
        let items = result.map_err(classify_sqlx_error)?;

        tracing::debug!(
            count = items.len(),
            sort = %params.sort,
            direction = params.direction.as_str(),
            "Listed prompts"
        );
        Ok(items)
    }

    /// Overwrite every mutable field of a prompt and refresh `updated_at`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrompt,
    ) -> Result<Prompt, CoreError> {
        input.validate()?;
        // GREATEST keeps updated_at >= created_at even if the server clock steps back.
        let query = format!(
            "UPDATE prompts SET
                title       = $1,
                prompt      = $2,
                genre       = $3,
                activity    = $4,
                is_favorite = $5,
                updated_at  = GREATEST(NOW(), created_at)
             WHERE id = $6
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.title)
            .bind(&input.prompt)
            .bind(&input.genre)
            .bind(normalize_activity(input.activity.as_deref()))
            .bind(input.is_favorite)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(classify_sqlx_error)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, "Prompt updated");
        Ok(updated)
    }

    /// Flip the favorite flag in place. Returns the updated row.
    pub async fn toggle_favorite(pool: &PgPool, id: DbId) -> Result<Prompt, CoreError> {
        let query = format!(
            "UPDATE prompts SET
                is_favorite = NOT is_favorite,
                updated_at  = GREATEST(NOW(), created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let toggled = sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(classify_sqlx_error)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, is_favorite = toggled.is_favorite, "Prompt favorite toggled");
        Ok(toggled)
    }

    /// Permanently delete a prompt. Fails with `NotFound` if it does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(classify_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        tracing::info!(id, "Prompt deleted");
        Ok(())
    }

    /// Count all prompts.
    pub async fn count(pool: &PgPool) -> Result<i64, CoreError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM prompts")
            .fetch_one(pool)
            .await
            .map_err(classify_sqlx_error)
    }
}
