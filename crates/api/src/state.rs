use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
/// No connection is held here; each handler acquires one per repository call.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: promptbase_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
