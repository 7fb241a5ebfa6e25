//! Handlers for the admin review queue: listing pending events and
//! approving them.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kwaground_core::error::CoreError;
use kwaground_core::share::format_date;
use kwaground_core::types::DbId;
use kwaground_db::models::event::PendingEventWithProfile;
use kwaground_db::repositories::{EventRepo, ProfileRepo};
use kwaground_notify::Notification;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/events/pending
///
/// Pending events joined with their creator's profile, newest first.
/// An empty review queue is an empty list.
pub async fn list_pending(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PendingEventWithProfile>>>> {
    let pending = EventRepo::list_pending_with_profiles(&state.pool).await?;
    Ok(Json(DataResponse { data: pending }))
}

/// POST /api/v1/admin/events/{id}/approve
///
/// Approve a pending event. The status update is guarded on the current
/// status, so two admins racing on the same event produce exactly one
/// approval; the loser gets a 409. The creator is notified by email,
/// fire-and-forget.
pub async fn approve_event(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    let profile = ProfileRepo::find_by_id(&state.pool, event.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: event.user_id,
        }))?;

    let approved = EventRepo::approve(&state.pool, id).await?;
    if !approved {
        return Err(AppError::Core(CoreError::Conflict(
            "Event is not pending approval".into(),
        )));
    }

    tracing::info!(admin_id = admin.user_id, event_id = id, "Event approved");

    notify_creator_of_approval(&state, id, &event.title, event.date, &event.location, &profile.email);

    Ok(StatusCode::NO_CONTENT)
}

/// Fire-and-forget the creator's approval email. Failures are logged only.
fn notify_creator_of_approval(
    state: &AppState,
    event_id: DbId,
    title: &str,
    date: chrono::NaiveDate,
    location: &str,
    creator_email: &str,
) {
    let Some(mailer) = &state.mailer else {
        tracing::debug!(event_id, "Approval email skipped (not configured)");
        return;
    };

    let notification = Notification::EventApproved {
        title: title.to_string(),
        date: format_date(date),
        location: location.to_string(),
    };

    let mailer = Arc::clone(mailer);
    let creator_email = creator_email.to_string();
    tokio::spawn(async move {
        if let Err(e) = mailer.deliver(&creator_email, &notification).await {
            tracing::warn!(event_id, error = %e, "Approval email failed");
        }
    });
}
