//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. A pooled connection is held
//! only for the duration of a single call.

pub mod prompt_repo;

pub use prompt_repo::PromptRepo;
