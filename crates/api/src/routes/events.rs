//! Route definitions for the `/events` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET  /               -> list approved (filter + search)
/// POST /               -> submit (multipart, requires auth)
/// GET  /mine           -> own submissions (requires auth)
/// GET  /favorites      -> saved events (requires auth)
/// PUT  /{id}/favorite  -> toggle favorite (requires auth)
/// GET  /{id}/share     -> share summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::submit_event))
        .route("/mine", get(events::list_mine))
        .route("/favorites", get(events::list_favorites))
        .route("/{id}/favorite", put(events::toggle_favorite))
        .route("/{id}/share", get(events::share_event))
}
