//! Repository for the `profiles` table.

use kwaground_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile};

const COLUMNS: &str = "id, name, email, organization, created_at";

/// Provides create/read access to profiles. Profiles are created once at
/// sign-up and never updated by this application.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, name, email, organization)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.organization)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by its user id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
