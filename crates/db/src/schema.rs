//! Schema Manager for the `prompts` table.
//!
//! There is no migration tooling: [`ensure_schema`] creates the table when it
//! is absent and is safe to call on every startup.

use promptbase_core::error::CoreError;
use sqlx::PgPool;

use crate::classify_sqlx_error;

const CREATE_PROMPTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS prompts (
    id          BIGSERIAL   PRIMARY KEY,
    title       TEXT        NOT NULL,
    prompt      TEXT        NOT NULL,
    genre       TEXT        NOT NULL,
    activity    TEXT,
    is_favorite BOOLEAN     NOT NULL DEFAULT FALSE,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT ck_prompts_title_not_blank  CHECK (btrim(title) <> ''),
    CONSTRAINT ck_prompts_prompt_not_blank CHECK (btrim(prompt) <> ''),
    CONSTRAINT ck_prompts_genre_not_blank  CHECK (btrim(genre) <> ''),
    CONSTRAINT ck_prompts_updated_at       CHECK (updated_at >= created_at)
)";

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_prompts_created_at ON prompts (created_at DESC)";

const DROP_PROMPTS_TABLE: &str = "DROP TABLE IF EXISTS prompts";

/// Create the `prompts` table and its index if they do not exist.
///
/// Existing rows are never touched.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), CoreError> {
    let mut tx = pool.begin().await.map_err(classify_sqlx_error)?;
    sqlx::query(CREATE_PROMPTS_TABLE)
        .execute(&mut *tx)
        .await
        .map_err(classify_sqlx_error)?;
    sqlx::query(CREATE_CREATED_AT_INDEX)
        .execute(&mut *tx)
        .await
        .map_err(classify_sqlx_error)?;
    tx.commit().await.map_err(classify_sqlx_error)?;
    tracing::debug!("Prompts schema ensured");
    Ok(())
}

/// Drop the `prompts` table and recreate it empty. Discards all data.
pub async fn reset_schema(pool: &PgPool) -> Result<(), CoreError> {
    tracing::warn!("Resetting prompts schema; all prompts will be deleted");
    let mut tx = pool.begin().await.map_err(classify_sqlx_error)?;
    for statement in [DROP_PROMPTS_TABLE, CREATE_PROMPTS_TABLE, CREATE_CREATED_AT_INDEX] {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(classify_sqlx_error)?;
    }
    tx.commit().await.map_err(classify_sqlx_error)?;
    tracing::info!("Prompts schema recreated");
    Ok(())
}
