//! Guest-list handlers: public signup, admin listing and CSV export.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::admin::AdminAccess;
use crate::api::dto::{
    CreateSignupRequest, ListSignupsParams, SignupCreatedResponse, SignupListResponse,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, SiteError};

/// `POST /event-signups`: Put a name on an event's guest list.
///
/// # Errors
///
/// Returns [`SiteError`] on validation failure, unknown or closed event,
/// or storage failure.
#[utoipa::path(
    post,
    path = "/api/v1/event-signups",
    tag = "Signups",
    summary = "Join an event guest list",
    description = "Validates the form, stores the signup and notifies the team. A failed notification is reported in `notification` and does not fail the request.",
    request_body = CreateSignupRequest,
    responses(
        (status = 201, description = "Signup stored", body = SignupCreatedResponse),
        (status = 400, description = "Missing slug or invalid name", body = ErrorResponse),
        (status = 404, description = "Unknown event", body = ErrorResponse),
        (status = 409, description = "Guest list closed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<CreateSignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SiteError> {
    let Json(req) = payload?;
    let receipt = state.submissions.submit_signup(req.into()).await?;
    Ok((StatusCode::CREATED, Json(SignupCreatedResponse::from(receipt))))
}

/// `GET /event-signups`: List signups, or download them as CSV.
///
/// # Errors
///
/// Returns [`SiteError`] when the admin secret is wrong or unset, or
/// signups cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/event-signups",
    tag = "Signups",
    summary = "List guest-list signups",
    description = "Newest first, optionally filtered by event. With `format=csv` the listing is returned as a CSV attachment.",
    params(ListSignupsParams),
    security(("admin_key" = [])),
    responses(
        (status = 200, description = "Signups (JSON or CSV)", body = SignupListResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 401, description = "Wrong admin key", body = ErrorResponse),
        (status = 500, description = "Admin key not configured or storage failure", body = ErrorResponse),
    )
)]
pub async fn list_signups(
    _admin: AdminAccess,
    State(state): State<AppState>,
    query: Result<Query<ListSignupsParams>, QueryRejection>,
) -> Result<Response, SiteError> {
    let Query(params) = query?;
    let event_slug = params.event_slug.as_deref();

    if params.wants_csv() {
        let export = state.submissions.export_signups(event_slug).await?;
        let disposition = format!("attachment; filename=\"{}\"", export.file_name);
        return Ok((
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            export.body,
        )
            .into_response());
    }

    let data = state.submissions.list_signups(event_slug).await?;
    Ok(Json(SignupListResponse { data }).into_response())
}

/// Guest-list routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/event-signups", get(list_signups).post(create_signup))
}
