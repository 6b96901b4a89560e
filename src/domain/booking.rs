//! Booking (contracting) inquiries.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CollectionRecord, RecordId};

/// A request to book the artist for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Assigned identifier.
    pub id: RecordId,
    /// Contact name.
    pub name: String,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Kind of event (wedding, club night, festival...).
    pub event_type: String,
    /// Expected date, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    /// Event city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Briefing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// Validated fields of a new booking request.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequestInput {
    /// Trimmed contact name, at least three characters.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Trimmed event type, at least three characters.
    pub event_type: String,
    /// Expected date.
    pub event_date: Option<String>,
    /// Event city.
    pub city: Option<String>,
    /// Briefing.
    pub message: Option<String>,
}

impl CollectionRecord for BookingRequest {
    const DOCUMENT: &'static str = "booking-requests.json";

    type Input = BookingRequestInput;

    fn assemble(id: RecordId, created_at: String, input: Self::Input) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            event_type: input.event_type,
            event_date: input.event_date,
            city: input.city,
            message: input.message,
            created_at,
        }
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}
