//! Category entity model.

use kwaground_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table. Seeded by migration; never mutated
/// by the application.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}
