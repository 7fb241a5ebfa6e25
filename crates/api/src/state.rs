use std::sync::Arc;

use kwaground_moderation::ModerationGate;
use kwaground_notify::Mailer;
use kwaground_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kwaground_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Text + image content moderation gate.
    pub moderation: Arc<ModerationGate>,
    /// Object store for uploaded event images. `None` disables uploads.
    pub store: Option<Arc<dyn ObjectStore>>,
    /// SMTP mailer for lifecycle notifications. `None` disables email.
    pub mailer: Option<Arc<Mailer>>,
}
