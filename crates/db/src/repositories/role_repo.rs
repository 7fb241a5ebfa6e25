//! Repository for the `roles` table.

use kwaground_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

/// Read access to the seeded roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Find a role by name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a role id to its name.
    pub async fn resolve_name(pool: &PgPool, id: DbId) -> Result<String, sqlx::Error> {
        let row: (String,) = sqlx::query_as("SELECT name FROM roles WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
