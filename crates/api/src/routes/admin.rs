//! Route definitions for the admin review queue.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin/events` (admin only).
///
/// ```text
/// GET  /pending       -> review queue
/// POST /{id}/approve  -> approve a pending event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(admin::list_pending))
        .route("/{id}/approve", post(admin::approve_event))
}
