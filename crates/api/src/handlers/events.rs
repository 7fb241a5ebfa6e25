//! Handlers for the `/events` resource: listing with filter/search, the
//! submission workflow, favorites, and share summaries.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime, Utc};
use kwaground_core::draft::EventDraft;
use kwaground_core::error::CoreError;
use kwaground_core::filter::{saved_events, visible, FilterSet};
use kwaground_core::share::{compose_share_text, format_date, format_time};
use kwaground_core::status::STATUS_PENDING;
use kwaground_core::types::DbId;
use kwaground_db::models::event::{CreateEvent, Event};
use kwaground_db::repositories::{EventRepo, FavoriteRepo, ProfileRepo};
use kwaground_moderation::Verdict;
use kwaground_notify::Notification;
use kwaground_storage::{image_key, ObjectStore, StorageError};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /events`.
///
/// `category` takes a comma-separated list of category names; selecting
/// `All Events` (or nothing) shows everything.
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Response body for the favorite toggle.
#[derive(Debug, Serialize)]
pub struct FavoriteToggleResponse {
    /// Whether the event is favorited after the toggle.
    pub favorited: bool,
    /// The caller's full favorite-id set after the toggle.
    pub favorite_ids: Vec<DbId>,
}

/// Response body for `GET /events/{id}/share`.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    /// Human-readable share summary.
    pub text: String,
    /// Public URL of the event.
    pub url: String,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/events
///
/// Approved events run through the category filter and free-text search.
/// Both predicates must hold; the fetch order (newest first) is preserved.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let events = EventRepo::list_approved(&state.pool).await?;

    let filters = FilterSet::from_selection(
        params
            .category
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty()),
    );
    let query = params.search.as_deref().unwrap_or_default();

    let matched: Vec<Event> = visible(&events, &filters, query)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DataResponse { data: matched }))
}

/// GET /api/v1/events/mine
///
/// The caller's own submissions, any status, newest first.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let events = EventRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// Submission workflow
// ---------------------------------------------------------------------------

/// POST /api/v1/events (multipart)
///
/// The submission pipeline, each step a failure point:
/// validate -> moderate text -> moderate image -> upload image ->
/// resolve profile -> insert pending -> notify admin.
///
/// If the insert fails after an image was uploaded, the uploaded object is
/// deleted again (best effort) so storage does not accumulate orphans.
pub async fn submit_event(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    let (draft, image) = read_submission(multipart).await?;

    draft.validate_draft()?;

    let date = parse_date(&draft.date)?;
    let time = draft.time.as_deref().map(parse_time).transpose()?;

    // Text moderation over title + description.
    if state.moderation.review_text(&draft.moderation_input()).await? == Verdict::Flagged {
        tracing::warn!(user_id = auth.user_id, "Submission text flagged by moderation");
        return Err(AppError::ContentRejected(
            "Your submission contains content that violates our community guidelines".into(),
        ));
    }

    // Image moderation, only when an image was attached.
    if let Some((filename, bytes, _)) = &image {
        if state.moderation.review_image(bytes.clone(), filename).await? == Verdict::Flagged {
            tracing::warn!(user_id = auth.user_id, "Submission image flagged by moderation");
            return Err(AppError::ContentRejected(
                "The uploaded image contains content that violates our community guidelines"
                    .into(),
            ));
        }
    }

    // Upload the image and record its public URL.
    let mut image_url = None;
    let mut uploaded_key = None;
    if let Some((filename, bytes, content_type)) = &image {
        let (url, key) = stage_image(
            state.store.as_deref(),
            auth.user_id,
            filename,
            bytes.clone(),
            content_type,
        )
        .await?;
        image_url = Some(url);
        uploaded_key = Some(key);
    }

    let profile = ProfileRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;

    let create = CreateEvent {
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        date,
        time,
        location: draft.location.trim().to_string(),
        category: draft.category.trim().to_string(),
        price: draft.price.clone(),
        tags: draft.tag_list(),
        image: image_url,
        user_id: auth.user_id,
        status: STATUS_PENDING.to_string(),
    };

    let event = match EventRepo::create(&state.pool, &create).await {
        Ok(event) => event,
        Err(err) => {
            // The event row never landed; remove the uploaded object again.
            if let (Some(key), Some(store)) = (&uploaded_key, state.store.as_deref()) {
                discard_uploaded_image(store, key).await;
            }
            return Err(err.into());
        }
    };

    tracing::info!(user_id = auth.user_id, event_id = event.id, "Event submitted for review");

    notify_admin_of_submission(&state, &event, &profile.email);

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// PUT /api/v1/events/{id}/favorite
///
/// Toggle the (user, event) favorite relation. Membership is checked first,
/// and the unique constraint backs the insert under concurrency, so the
/// toggle is idempotent per pair.
pub async fn toggle_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FavoriteToggleResponse>>> {
    ensure_event_exists(&state, id).await?;

    let existed = FavoriteRepo::exists(&state.pool, auth.user_id, id).await?;
    if existed {
        FavoriteRepo::delete(&state.pool, auth.user_id, id).await?;
    } else {
        FavoriteRepo::insert(&state.pool, auth.user_id, id).await?;
    }

    let favorite_ids = FavoriteRepo::list_event_ids_for_user(&state.pool, auth.user_id).await?;

    tracing::debug!(
        user_id = auth.user_id,
        event_id = id,
        favorited = !existed,
        "Favorite toggled"
    );

    Ok(Json(DataResponse {
        data: FavoriteToggleResponse {
            favorited: !existed,
            favorite_ids,
        },
    }))
}

/// GET /api/v1/events/favorites
///
/// The caller's saved events: approved events intersected with their
/// favorite-id set, in the approved fetch order.
pub async fn list_favorites(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let events = EventRepo::list_approved(&state.pool).await?;
    let favorite_ids: HashSet<DbId> =
        FavoriteRepo::list_event_ids_for_user(&state.pool, auth.user_id)
            .await?
            .into_iter()
            .collect();

    let saved: Vec<Event> = saved_events(&events, &favorite_ids)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DataResponse { data: saved }))
}

// ---------------------------------------------------------------------------
// Share
// ---------------------------------------------------------------------------

/// GET /api/v1/events/{id}/share
///
/// Compose the shareable summary and public URL for an event. The client
/// hands the text to its share targets (native surface, clipboard, legacy
/// copy) in order.
pub async fn share_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ShareResponse>>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    let url = format!("{}/events/{}", state.config.public_base_url, event.id);
    let date = format_date(event.date);
    let time = event.time.map(format_time);

    let text = compose_share_text(
        &event.title,
        &event.description,
        &date,
        time.as_deref(),
        &event.location,
        event.price.as_deref(),
        &url,
    );

    Ok(Json(DataResponse {
        data: ShareResponse { text, url },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify an event exists, mapping absence to a 404.
pub async fn ensure_event_exists(state: &AppState, id: DbId) -> AppResult<()> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(())
}

/// Read the multipart submission into a draft plus an optional image part
/// of `(filename, bytes, content_type)`.
async fn read_submission(
    mut multipart: Multipart,
) -> AppResult<(EventDraft, Option<(String, Vec<u8>, String)>)> {
    let mut draft = EventDraft::default();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image = Some((filename, data.to_vec(), content_type));
            }
            other => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                match other {
                    "title" => draft.title = text,
                    "description" => draft.description = text,
                    "date" => draft.date = text,
                    "time" => draft.time = Some(text),
                    "location" => draft.location = text,
                    "category" => draft.category = text,
                    "price" => draft.price = Some(text),
                    "tags" => draft.tags = Some(text),
                    _ => {} // unknown fields are ignored
                }
            }
        }
    }

    // Empty optional form fields mean "absent", not "present but blank".
    draft.time = draft.time.filter(|t| !t.trim().is_empty());
    draft.price = draft.price.filter(|p| !p.trim().is_empty());
    draft.tags = draft.tags.filter(|t| !t.trim().is_empty());

    Ok((draft, image))
}

/// Upload a moderated image, returning its public URL and object key.
///
/// A submission carrying an image is rejected outright when no store is
/// configured; the upload must never be silently dropped.
async fn stage_image(
    store: Option<&dyn ObjectStore>,
    user_id: DbId,
    filename: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> AppResult<(String, String)> {
    let store = store.ok_or_else(|| {
        AppError::Upload(StorageError::Upload(
            "image uploads are not configured".to_string(),
        ))
    })?;
    let key = image_key(user_id, Utc::now().timestamp(), filename);
    store.upload(&key, bytes, content_type).await?;
    Ok((store.public_url(&key), key))
}

/// Best-effort removal of an uploaded object whose event row never landed.
async fn discard_uploaded_image(store: &dyn ObjectStore, key: &str) {
    if let Err(cleanup_err) = store.delete(key).await {
        tracing::warn!(key, error = %cleanup_err, "Orphaned image cleanup failed");
    }
}

/// Parse the form date (`YYYY-MM-DD`).
fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Core(CoreError::Validation(
            "Event date must be in YYYY-MM-DD format".into(),
        ))
    })
}

/// Parse the form time (`HH:MM`, seconds optional).
fn parse_time(raw: &str) -> AppResult<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| {
            AppError::Core(CoreError::Validation(
                "Event time must be in HH:MM format".into(),
            ))
        })
}

/// Fire-and-forget the admin "new submission" email. Failures are logged,
/// never surfaced to the submitter.
fn notify_admin_of_submission(state: &AppState, event: &Event, submitter_email: &str) {
    let (Some(mailer), Some(admin_email)) = (&state.mailer, &state.config.admin_email) else {
        tracing::debug!(event_id = event.id, "Admin submission email skipped (not configured)");
        return;
    };

    let notification = Notification::EventSubmitted {
        title: event.title.clone(),
        date: format_date(event.date),
        time: event.time.map(format_time),
        location: event.location.clone(),
        category: event.category.clone(),
        description: event.description.clone(),
        submitter_email: submitter_email.to_string(),
    };

    let mailer = Arc::clone(mailer);
    let admin_email = admin_email.clone();
    let event_id = event.id;
    tokio::spawn(async move {
        if let Err(e) = mailer.deliver(&admin_email, &notification).await {
            tracing::warn!(event_id, error = %e, "Admin submission email failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_matches::assert_matches;
    use kwaground_storage::MemoryStore;

    #[tokio::test]
    async fn image_submission_without_store_is_rejected() {
        let err = stage_image(None, 7, "poster.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Upload(_));
    }

    #[tokio::test]
    async fn staged_image_is_publicly_addressable() {
        let store = MemoryStore::new();
        let (url, key) = stage_image(Some(&store), 7, "poster.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();
        assert_eq!(url, format!("memory://{key}"));
        assert_eq!(store.get(&key).as_deref(), Some(&[1u8, 2, 3][..]));
    }

    #[tokio::test]
    async fn failed_insert_leaves_no_orphaned_image() {
        let store = MemoryStore::new();
        let (_url, key) = stage_image(Some(&store), 7, "poster.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();
        assert!(!store.is_empty());

        discard_uploaded_image(&store, &key).await;
        assert!(store.is_empty());
    }

    #[test]
    fn date_parsing() {
        assert_eq!(
            parse_date("2026-09-12").unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
        );
        assert!(parse_date("12/09/2026").is_err());
    }

    #[test]
    fn time_parsing_accepts_optional_seconds() {
        assert_eq!(
            parse_time("19:30").unwrap(),
            NaiveTime::from_hms_opt(19, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("19:30:15").unwrap(),
            NaiveTime::from_hms_opt(19, 30, 15).unwrap()
        );
        assert!(parse_time("7pm").is_err());
    }
}
