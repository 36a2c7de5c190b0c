//! # Task Manager Shared Library
//!
//! This crate contains the data layer shared by the task manager API server:
//! database models, connection pool management, and slug derivation.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `db`: Connection pool and migration utilities
//! - `slug`: URL-safe slug derivation

pub mod db;
pub mod models;
pub mod slug;

/// Current version of the task manager shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
