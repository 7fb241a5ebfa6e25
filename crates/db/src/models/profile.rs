//! Profile entity models and DTOs.
//!
//! A profile extends an auth user with display attributes. Created once at
//! sign-up and read-only thereafter.

use kwaground_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `profiles` table. `id` equals the owning user's id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a profile at sign-up.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
}
