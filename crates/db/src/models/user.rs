//! User entity models and DTOs.

use kwaground_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `users` table.
///
/// `password_hash` is a PHC-formatted Argon2id hash and must never be
/// serialized out of the API.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
}
