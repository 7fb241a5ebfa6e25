pub mod admin;
pub mod auth;
pub mod categories;
pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
/// /auth/me                           current user + profile
///
/// /events                            list approved (GET), submit (POST, multipart)
/// /events/mine                       own submissions (GET)
/// /events/favorites                  saved events (GET)
/// /events/{id}/favorite              toggle favorite (PUT)
/// /events/{id}/share                 share summary (GET)
///
/// /admin/events/pending              review queue (GET, admin only)
/// /admin/events/{id}/approve         approve (POST, admin only)
///
/// /categories                        list categories (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/events", events::router())
        .nest("/admin/events", admin::router())
        .nest("/categories", categories::router())
}
