//! Repository for the `events` table.

use kwaground_core::status::{STATUS_APPROVED, STATUS_PENDING};
use kwaground_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, PendingEventWithProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, date, time, location, category, \
                        price, tags, image, user_id, status, created_at";

/// Provides CRUD operations for events.
///
/// Events are never deleted; the only mutation is the status transition
/// `pending -> approved`.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, description, date, time, location, category, \
                                 price, tags, image, user_id, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.location)
            .bind(&input.category)
            .bind(&input.price)
            .bind(&input.tags)
            .bind(&input.image)
            .bind(input.user_id)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an event by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all approved events, most recently created first.
    pub async fn list_approved(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events WHERE status = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(STATUS_APPROVED)
            .fetch_all(pool)
            .await
    }

    /// List a user's own submissions, any status, most recent first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List pending events joined with their creator's profile, newest first.
    ///
    /// An empty review queue is an empty list, not an error.
    pub async fn list_pending_with_profiles(
        pool: &PgPool,
    ) -> Result<Vec<PendingEventWithProfile>, sqlx::Error> {
        sqlx::query_as::<_, PendingEventWithProfile>(
            "SELECT e.id, e.title, e.description, e.date, e.time, e.location, e.category, \
                    e.price, e.tags, e.image, e.user_id, e.status, e.created_at, \
                    p.name AS creator_name, p.email AS creator_email, \
                    p.organization AS creator_organization
             FROM events e
             JOIN profiles p ON p.id = e.user_id
             WHERE e.status = $1
             ORDER BY e.created_at DESC",
        )
        .bind(STATUS_PENDING)
        .fetch_all(pool)
        .await
    }

    /// Transition an event from `pending` to `approved`.
    ///
    /// The `WHERE status = 'pending'` guard makes concurrent approvals of the
    /// same event safe: exactly one caller observes `true`, every other
    /// caller observes `false`.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE events SET status = $2 WHERE id = $1 AND status = $3")
            .bind(id)
            .bind(STATUS_APPROVED)
            .bind(STATUS_PENDING)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
