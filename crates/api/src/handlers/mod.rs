//! Request handlers.
//!
//! Handlers validate input, delegate to the repositories in `promptbase_db`
//! and map classified failures via [`AppError`](crate::error::AppError).

pub mod page;
pub mod prompt;
