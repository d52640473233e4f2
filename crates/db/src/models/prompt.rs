//! Prompt models and DTOs.

use promptbase_core::error::CoreError;
use promptbase_core::prompt::validate_prompt_fields;
use promptbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Prompt {
    pub id: DbId,
    pub title: String,
    pub prompt: String,
    pub genre: String,
    pub activity: Option<String>,
    pub is_favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a new prompt. New prompts are never favorites.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrompt {
    pub title: String,
    pub prompt: String,
    pub genre: String,
    #[serde(default)]
    pub activity: Option<String>,
}

impl CreatePrompt {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_prompt_fields(&self.title, &self.prompt, &self.genre)
    }
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for updating a prompt. Every mutable field is overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrompt {
    pub title: String,
    pub prompt: String,
    pub genre: String,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl UpdatePrompt {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_prompt_fields(&self.title, &self.prompt, &self.genre)
    }
}
