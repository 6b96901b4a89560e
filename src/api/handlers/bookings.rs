//! Booking request handlers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::admin::AdminAccess;
use crate::api::dto::{BookingCreatedResponse, BookingListResponse, CreateBookingRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, SiteError};

/// `POST /booking-requests`: Ask to book the artist.
///
/// # Errors
///
/// Returns [`SiteError`] on validation or storage failure.
#[utoipa::path(
    post,
    path = "/api/v1/booking-requests",
    tag = "Bookings",
    summary = "Send a booking request",
    description = "Validates the form, stores the request and notifies the team. A failed notification is reported in `notification` and does not fail the request.",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Request stored", body = BookingCreatedResponse),
        (status = 400, description = "Invalid name or event type", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SiteError> {
    let Json(req) = payload?;
    let receipt = state.submissions.submit_booking(req.into()).await?;
    Ok((StatusCode::CREATED, Json(BookingCreatedResponse::from(receipt))))
}

/// `GET /booking-requests`: List every booking request.
///
/// # Errors
///
/// Returns [`SiteError`] when the admin secret is wrong or unset, or the
/// requests cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/booking-requests",
    tag = "Bookings",
    summary = "List booking requests",
    description = "Returns every booking request, newest first.",
    security(("admin_key" = [])),
    responses(
        (status = 200, description = "Booking requests", body = BookingListResponse),
        (status = 401, description = "Wrong admin key", body = ErrorResponse),
        (status = 500, description = "Admin key not configured or storage failure", body = ErrorResponse),
    )
)]
pub async fn list_bookings(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, SiteError> {
    let data = state.submissions.list_bookings().await?;
    Ok(Json(BookingListResponse { data }))
}

/// Booking routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/booking-requests", get(list_bookings).post(create_booking))
}
