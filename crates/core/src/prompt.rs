//! Prompt field validation and list ordering.
//!
//! Sort columns occupy an identifier position in the `ORDER BY` clause, where
//! bound parameters cannot be used. [`SortKey`] is therefore a closed set, and
//! every accepted key maps to a static clause fragment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Field validation
   -------------------------------------------------------------------------- */

/// Entity name used in `NotFound` errors.
pub const ENTITY_PROMPT: &str = "Prompt";

/// Reject empty or whitespace-only values for a required text field.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate the three required text fields of a prompt in display order.
pub fn validate_prompt_fields(title: &str, prompt: &str, genre: &str) -> Result<(), CoreError> {
    validate_required("title", title)?;
    validate_required("prompt", prompt)?;
    validate_required("genre", genre)?;
    Ok(())
}

/// Collapse a blank activity tag to `None` and trim surrounding whitespace.
pub fn normalize_activity(activity: Option<&str>) -> Option<String> {
    activity
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
}

/* --------------------------------------------------------------------------
   Search
   -------------------------------------------------------------------------- */

/// Turn a user search string into an `ILIKE` pattern.
///
/// Returns `None` for blank input (no filtering). Non-blank input is used
/// as typed, surrounding whitespace included. `%`, `_` and `\` are escaped
/// so they match literally; the result is always bound as a parameter,
/// never spliced into query text.
pub fn search_pattern(search: Option<&str>) -> Option<String> {
    let term = search.filter(|s| !s.trim().is_empty())?;

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

/* --------------------------------------------------------------------------
   Sorting
   -------------------------------------------------------------------------- */

/// Column a prompt list may be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    CreatedAt,
    Title,
    IsFavorite,
    Activity,
}

impl SortKey {
    /// All accepted keys, in the order they are offered to users.
    pub const ALL: [SortKey; 4] = [
        SortKey::CreatedAt,
        SortKey::Title,
        SortKey::IsFavorite,
        SortKey::Activity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::Title => "title",
            SortKey::IsFavorite => "is_favorite",
            SortKey::Activity => "activity",
        }
    }

    /// Static `ORDER BY` body for this key and direction.
    ///
    /// Ties are broken on `id` so the ordering is total.
    pub fn order_clause(self, direction: SortDirection) -> &'static str {
        match (self, direction) {
            (SortKey::CreatedAt, SortDirection::Desc) => "created_at DESC, id DESC",
            (SortKey::CreatedAt, SortDirection::Asc) => "created_at ASC, id ASC",
            (SortKey::Title, SortDirection::Desc) => "title DESC, id DESC",
            (SortKey::Title, SortDirection::Asc) => "title ASC, id ASC",
            (SortKey::IsFavorite, SortDirection::Desc) => "is_favorite DESC, id DESC",
            (SortKey::IsFavorite, SortDirection::Asc) => "is_favorite ASC, id ASC",
            (SortKey::Activity, SortDirection::Desc) => "activity DESC NULLS LAST, id DESC",
            (SortKey::Activity, SortDirection::Asc) => "activity ASC NULLS LAST, id ASC",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid sort key '{s}'. Must be one of: {}",
                    allowed.join(", ")
                ))
            })
    }
}

/// Ordering direction. Lists default to most recent first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(CoreError::Validation(format!(
                "Invalid sort direction '{s}'. Must be one of: asc, desc"
            ))),
        }
    }
}

/// Parameters for listing prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub sort: SortKey,
    pub direction: SortDirection,
}

impl ListQuery {
    /// Build a query from raw user input, validating sort key and direction.
    ///
    /// Missing or blank values fall back to the defaults.
    pub fn parse(
        search: Option<&str>,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Self, CoreError> {
        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s.parse()?,
            None => SortKey::default(),
        };
        let direction = match direction.map(str::trim).filter(|s| !s.is_empty()) {
            Some(d) => d.parse()?,
            None => SortDirection::default(),
        };
        Ok(Self {
            search: search.map(str::to_string),
            sort,
            direction,
        })
    }
}
