use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use promptbase_core::error::CoreError;
use serde_json::json;

use crate::page;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for classified repository failures. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A classified failure from `promptbase_core` / `promptbase_db`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status, stable error code and user-facing message.
    ///
    /// Connection and storage details are logged, never returned.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        let AppError::Core(core) = self;
        match core {
            CoreError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            CoreError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            CoreError::Connection(msg) => {
                tracing::error!(error = %msg, "Database connection error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CONNECTION_ERROR",
                    "The database is unavailable".to_string(),
                )
            }
            CoreError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "The database rejected the operation".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Error type for the server-rendered page handlers.
///
/// Same classification as [`AppError`], rendered as an HTML page so a
/// browser form post never lands on a raw JSON body.
#[derive(Debug)]
pub struct PageError(pub AppError);

/// Convenience type alias for page handler return values.
pub type PageResult<T> = Result<T, PageError>;

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        PageError(AppError::Core(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _code, message) = self.0.classify();
        (status, Html(page::render_error(status, &message))).into_response()
    }
}
