//! Role entity model.

use kwaground_core::types::DbId;
use sqlx::FromRow;

/// A row from the `roles` table. Seeded by migration.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: DbId,
    pub name: String,
}
