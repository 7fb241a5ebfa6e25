//! Event entity models and DTOs.

use chrono::{NaiveDate, NaiveTime};
use kwaground_core::filter::EventView;
use kwaground_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub category: String,
    pub price: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub user_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
}

impl EventView for Event {
    fn id(&self) -> DbId {
        self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn category(&self) -> &str {
        &self.category
    }
}

/// DTO for inserting a new event.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub category: String,
    pub price: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub user_id: DbId,
    pub status: String,
}

/// A pending event joined with its creator's profile, for the review queue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingEventWithProfile {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub category: String,
    pub price: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub user_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub creator_name: String,
    pub creator_email: String,
    pub creator_organization: Option<String>,
}
