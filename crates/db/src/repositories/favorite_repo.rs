//! Repository for the `user_favorites` table.
//!
//! A favorite is the (user, event) pair itself; the table carries the
//! `uq_user_favorites_user_event` unique constraint so at most one row
//! exists per pair.

use kwaground_core::types::DbId;
use sqlx::PgPool;

/// Provides membership, insert, and delete for favorite relations.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Whether a favorite exists for (user, event).
    pub async fn exists(pool: &PgPool, user_id: DbId, event_id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM user_favorites WHERE user_id = $1 AND event_id = $2)",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Insert a favorite. `ON CONFLICT DO NOTHING` keeps a concurrent
    /// double-add idempotent instead of erroring.
    pub async fn insert(pool: &PgPool, user_id: DbId, event_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_favorites (user_id, event_id) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_user_favorites_user_event DO NOTHING",
        )
        .bind(user_id)
        .bind(event_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a favorite. Deleting an absent favorite is a no-op.
    pub async fn delete(pool: &PgPool, user_id: DbId, event_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM user_favorites WHERE user_id = $1 AND event_id = $2")
            .bind(user_id)
            .bind(event_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// All event ids favorited by a user, oldest favorite first.
    pub async fn list_event_ids_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT event_id FROM user_favorites WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
