//! DTOs for the guest-list endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{EventSignup, NotificationOutcome};
use crate::service::{Receipt, SignupForm};

/// Request body for `POST /api/v1/event-signups`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignupRequest {
    /// Slug of the event.
    #[serde(default)]
    pub event_slug: Option<String>,
    /// Full name, at least three characters.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Home city.
    #[serde(default)]
    pub city: Option<String>,
    /// Companions, clamped to `0..=2`.
    #[serde(default)]
    #[schema(value_type = Option<u8>)]
    pub guest_count: Option<Value>,
    /// Free-form note.
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateSignupRequest> for SignupForm {
    fn from(req: CreateSignupRequest) -> Self {
        Self {
            event_slug: req.event_slug,
            name: req.name,
            email: req.email,
            phone: req.phone,
            city: req.city,
            guest_count: req.guest_count,
            notes: req.notes,
        }
    }
}

/// Response for a stored signup.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignupCreatedResponse {
    /// Confirmation text.
    pub message: String,
    /// The stored signup.
    pub data: EventSignup,
    /// Whether the team was notified.
    pub notification: NotificationOutcome,
}

impl From<Receipt<EventSignup>> for SignupCreatedResponse {
    fn from(receipt: Receipt<EventSignup>) -> Self {
        Self {
            message: "Inscricao realizada com sucesso.".to_string(),
            data: receipt.record,
            notification: receipt.notification,
        }
    }
}

/// Query parameters for `GET /api/v1/event-signups`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListSignupsParams {
    /// Only signups for this event.
    pub event_slug: Option<String>,
    /// `csv` returns a download instead of JSON.
    pub format: Option<String>,
    /// Admin secret, for links that cannot set headers.
    pub admin_key: Option<String>,
}

impl ListSignupsParams {
    /// Whether a CSV download was requested.
    #[must_use]
    pub fn wants_csv(&self) -> bool {
        self.format.as_deref() == Some("csv")
    }
}

/// Signups, newest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignupListResponse {
    /// Matching signups.
    pub data: Vec<EventSignup>,
}
