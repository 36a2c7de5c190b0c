/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `user`: User CRUD endpoints
/// - `task`: Task CRUD endpoints

pub mod health;
pub mod task;
pub mod user;

use serde::{Deserialize, Serialize};

/// Acknowledgment returned by mutating endpoints
///
/// Mutating endpoints return this small status object instead of the
/// mutated resource; callers re-fetch when they need the row (including the
/// generated id after a create).
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    /// HTTP status code, repeated in the body
    pub status_code: u16,

    /// Outcome description, e.g. "Successful"
    pub transaction: String,
}

impl Ack {
    /// Acknowledgment for a successful create (201)
    pub fn created() -> Self {
        Self {
            status_code: 201,
            transaction: "Successful".to_string(),
        }
    }

    /// Acknowledgment for a successful update or delete (200)
    pub fn ok(transaction: &str) -> Self {
        Self {
            status_code: 200,
            transaction: transaction.to_string(),
        }
    }
}
