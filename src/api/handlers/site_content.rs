//! Admin handlers for the site content document.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::api::admin::AdminAccess;
use crate::api::dto::{SiteContentResponse, SiteContentSavedResponse};
use crate::app_state::AppState;
use crate::domain::SiteContent;
use crate::error::{ErrorResponse, SiteError};

/// `GET /site-content`: Current normalized content.
///
/// # Errors
///
/// Returns [`SiteError`] when the admin secret is wrong or unset, or the
/// document cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/site-content",
    tag = "Site content",
    summary = "Get site content",
    description = "Returns the stored document normalized against the defaults. `updatedAt` is `seed` until the first save.",
    security(("admin_key" = [])),
    responses(
        (status = 200, description = "Current content", body = SiteContentResponse),
        (status = 401, description = "Wrong admin key", body = ErrorResponse),
        (status = 500, description = "Admin key not configured or storage failure", body = ErrorResponse),
    )
)]
pub async fn get_site_content(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, SiteError> {
    let data = state.content.load().await?;
    Ok(Json(SiteContentResponse { data }))
}

/// `PUT /site-content`: Replace the whole document.
///
/// # Errors
///
/// Returns [`SiteError`] when the admin secret is wrong or unset, the body
/// is not JSON, or the document cannot be written.
#[utoipa::path(
    put,
    path = "/api/v1/site-content",
    tag = "Site content",
    summary = "Replace site content",
    description = "Accepts any JSON. Malformed fields fall back to their defaults, invalid list entries are dropped, and `updatedAt` is set to the save time.",
    request_body = SiteContent,
    security(("admin_key" = [])),
    responses(
        (status = 200, description = "Content stored", body = SiteContentSavedResponse),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 401, description = "Wrong admin key", body = ErrorResponse),
        (status = 500, description = "Admin key not configured or storage failure", body = ErrorResponse),
    )
)]
pub async fn put_site_content(
    _admin: AdminAccess,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, SiteError> {
    let Json(raw) = payload?;
    let saved = state.content.save(&raw).await?;
    Ok(Json(SiteContentSavedResponse::from(saved)))
}

/// Site content routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/site-content", get(get_site_content).put(put_site_content))
}
