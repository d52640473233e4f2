use axum::extract::State;
use axum::{routing::get, Json, Router};
use promptbase_db::repositories::PromptRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and the `prompts` table is queryable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether `prompts` exists; false until `ensure_schema` has run.
    pub schema_ready: bool,
}

/// GET /health -- returns service, database and schema health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = promptbase_db::health_check(&state.pool).await.is_ok();
    let schema_ready = db_healthy && PromptRepo::count(&state.pool).await.is_ok();

    let status = if schema_ready { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_ready,
    })
}

/// Mount health check routes (root-level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
