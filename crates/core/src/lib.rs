//! Domain types, error taxonomy and validation for Promptbase.
//!
//! This crate has no database or HTTP dependencies so it can be shared by
//! the repository layer and the API layer alike.

pub mod error;
pub mod prompt;
pub mod types;
