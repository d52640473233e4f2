//! Shared query parameter types for API handlers.

use promptbase_core::prompt::ListQuery;
use serde::Deserialize;

use crate::error::AppResult;

/// Listing parameters (`?search=&sort=&direction=`).
///
/// `sort` and `direction` arrive as raw strings so that an unknown value is
/// reported as a validation error rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> AppResult<ListQuery> {
        Ok(ListQuery::parse(
            self.search.as_deref(),
            self.sort.as_deref(),
            self.direction.as_deref(),
        )?)
    }
}
