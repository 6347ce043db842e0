//! Admin console user entity and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wedsite_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserWithRole`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe user representation joined with the assigned role, if any.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserWithRole {
    pub id: DbId,
    pub email: String,
    pub role: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}
