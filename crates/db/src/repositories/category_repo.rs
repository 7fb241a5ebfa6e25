//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Read-only access to the seeded category set.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in seed order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
