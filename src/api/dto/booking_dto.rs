//! DTOs for the booking endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BookingRequest, NotificationOutcome};
use crate::service::{BookingForm, Receipt};

/// Request body for `POST /api/v1/booking-requests`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Contact name, at least three characters.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Kind of event, at least three characters.
    #[serde(default)]
    pub event_type: Option<String>,
    /// Expected date.
    #[serde(default)]
    pub event_date: Option<String>,
    /// Event city.
    #[serde(default)]
    pub city: Option<String>,
    /// Briefing.
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CreateBookingRequest> for BookingForm {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            event_type: req.event_type,
            event_date: req.event_date,
            city: req.city,
            message: req.message,
        }
    }
}

/// Response for a stored booking request.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingCreatedResponse {
    /// Confirmation text.
    pub message: String,
    /// The stored request.
    pub data: BookingRequest,
    /// Whether the team was notified.
    pub notification: NotificationOutcome,
}

impl From<Receipt<BookingRequest>> for BookingCreatedResponse {
    fn from(receipt: Receipt<BookingRequest>) -> Self {
        Self {
            message: "Pedido de contratacao enviado com sucesso.".to_string(),
            data: receipt.record,
            notification: receipt.notification,
        }
    }
}

/// Booking requests, newest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingListResponse {
    /// All requests.
    pub data: Vec<BookingRequest>,
}
