//! Public event listing and social feed.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{EventListResponse, EventResponse, FeedParams, FeedResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, SiteError};
use crate::service::feed::clamp_limit;

/// `GET /events`: Events in display order.
///
/// # Errors
///
/// Returns [`SiteError`] when the site content cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    summary = "List events",
    responses(
        (status = 200, description = "Events", body = EventListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, SiteError> {
    let data = state.content.events().await?;
    Ok(Json(EventListResponse { data }))
}

/// `GET /events/{slug}`: One event.
///
/// # Errors
///
/// Returns [`SiteError::EventNotFound`] for a blank or unknown slug.
#[utoipa::path(
    get,
    path = "/api/v1/events/{slug}",
    tag = "Events",
    summary = "Get an event",
    params(("slug" = String, Path, description = "Event slug")),
    responses(
        (status = 200, description = "Event", body = EventResponse),
        (status = 404, description = "Unknown event", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, SiteError> {
    let Some(data) = state.content.event_by_slug(&slug).await? else {
        return Err(SiteError::EventNotFound(slug));
    };
    Ok(Json(EventResponse { data }))
}

/// `GET /feed`: Recent social posts.
///
/// # Errors
///
/// Returns [`SiteError`] when the query string does not parse.
#[utoipa::path(
    get,
    path = "/api/v1/feed",
    tag = "Events",
    summary = "Recent social posts",
    description = "Posts from the social provider, or the built-in fallback posts when it is not configured or unavailable.",
    params(FeedParams),
    responses(
        (status = 200, description = "Posts", body = FeedResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
    )
)]
pub async fn get_feed(
    State(state): State<AppState>,
    query: Result<Query<FeedParams>, QueryRejection>,
) -> Result<Json<FeedResponse>, SiteError> {
    let Query(params) = query?;
    let data = state.feed.recent_posts(clamp_limit(params.limit)).await;
    Ok(Json(FeedResponse { data }))
}

/// Event and feed routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{slug}", get(get_event))
        .route("/feed", get(get_feed))
}
