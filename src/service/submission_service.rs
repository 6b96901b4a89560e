//! Public form submissions and their admin listings.

use std::sync::Arc;

use serde_json::Value;

use super::export::{CsvExport, export_file_name, render_signups_csv};
use super::{NotificationDispatcher, RecordCollection, SiteContentService};
use crate::domain::{
    BookingRequest, BookingRequestInput, EventSignup, EventSignupInput, NotificationOutcome,
    normalize_guest_count,
};
use crate::error::SiteError;
use crate::store::DocumentStore;

/// Shortest accepted name or event type, in characters.
pub const MIN_TEXT_LEN: usize = 3;

const CLOSED_LIST_MESSAGE: &str = "A lista para este evento esta encerrada.";

/// Raw guest-list form as submitted.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    /// Event slug.
    pub event_slug: Option<String>,
    /// Full name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Home city.
    pub city: Option<String>,
    /// Companions, any JSON value.
    pub guest_count: Option<Value>,
    /// Free-form note.
    pub notes: Option<String>,
}

/// Raw booking form as submitted.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    /// Contact name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Kind of event.
    pub event_type: Option<String>,
    /// Expected date.
    pub event_date: Option<String>,
    /// Event city.
    pub city: Option<String>,
    /// Briefing.
    pub message: Option<String>,
}

/// A stored record and what happened to its notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt<R> {
    /// The persisted record.
    pub record: R,
    /// Notification result; never an error.
    pub notification: NotificationOutcome,
}

fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn optional(value: Option<String>) -> Option<String> {
    Some(text(value)).filter(|v| !v.is_empty())
}

fn too_short(value: &str) -> bool {
    value.chars().count() < MIN_TEXT_LEN
}

/// Validates and stores signups and bookings, then notifies the team.
#[derive(Debug, Clone)]
pub struct SubmissionService {
    signups: RecordCollection<EventSignup>,
    bookings: RecordCollection<BookingRequest>,
    content: SiteContentService,
    notifications: NotificationDispatcher,
}

impl SubmissionService {
    /// Creates the service over `store`.
    #[must_use]
    pub fn new(
        store: Arc<DocumentStore>,
        content: SiteContentService,
        notifications: NotificationDispatcher,
    ) -> Self {
        Self {
            signups: RecordCollection::new(Arc::clone(&store)),
            bookings: RecordCollection::new(store),
            content,
            notifications,
        }
    }

    /// Adds a name to an event's guest list.
    ///
    /// # Errors
    ///
    /// - [`SiteError::InvalidRequest`] for a blank slug or a short name.
    /// - [`SiteError::EventNotFound`] when the slug matches no event.
    /// - [`SiteError::SignupClosed`] when the event's list is closed.
    /// - [`SiteError::Storage`] when the signup could not be stored.
    pub async fn submit_signup(&self, form: SignupForm) -> Result<Receipt<EventSignup>, SiteError> {
        let event_slug = text(form.event_slug);
        let name = text(form.name);

        if event_slug.is_empty() {
            return Err(SiteError::InvalidRequest("Evento nao informado.".to_string()));
        }
        if too_short(&name) {
            return Err(SiteError::InvalidRequest(
                "Informe um nome completo valido.".to_string(),
            ));
        }

        let Some(event) = self.content.event_by_slug(&event_slug).await? else {
            return Err(SiteError::EventNotFound(event_slug));
        };
        if !event.signup_open {
            let message = Some(event.signup_closed_message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| CLOSED_LIST_MESSAGE.to_string());
            return Err(SiteError::SignupClosed {
                slug: event.slug,
                message,
            });
        }

        let signup = self
            .signups
            .create(EventSignupInput {
                event_slug,
                name,
                email: optional(form.email),
                phone: optional(form.phone),
                city: optional(form.city),
                guest_count: normalize_guest_count(form.guest_count.as_ref()),
                notes: optional(form.notes),
            })
            .await?;

        let notification = self.notifications.notify_signup(&signup, &event.title).await;
        Ok(Receipt {
            record: signup,
            notification,
        })
    }

    /// Stores a booking inquiry.
    ///
    /// # Errors
    ///
    /// - [`SiteError::InvalidRequest`] for a short name or event type.
    /// - [`SiteError::Storage`] when the request could not be stored.
    pub async fn submit_booking(
        &self,
        form: BookingForm,
    ) -> Result<Receipt<BookingRequest>, SiteError> {
        let name = text(form.name);
        let event_type = text(form.event_type);

        if too_short(&name) {
            return Err(SiteError::InvalidRequest(
                "Informe um nome valido para contato.".to_string(),
            ));
        }
        if too_short(&event_type) {
            return Err(SiteError::InvalidRequest(
                "Informe o tipo do evento para contratacao.".to_string(),
            ));
        }

        let booking = self
            .bookings
            .create(BookingRequestInput {
                name,
                email: optional(form.email),
                phone: optional(form.phone),
                event_type,
                event_date: optional(form.event_date),
                city: optional(form.city),
                message: optional(form.message),
            })
            .await?;

        let notification = self.notifications.notify_booking(&booking).await;
        Ok(Receipt {
            record: booking,
            notification,
        })
    }

    /// Signups newest first, optionally for one event only.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when the signups cannot be read.
    pub async fn list_signups(&self, event_slug: Option<&str>) -> Result<Vec<EventSignup>, SiteError> {
        let filter = event_slug.map(str::trim).filter(|s| !s.is_empty());
        let signups = self
            .signups
            .list(|signup| filter.is_none_or(|slug| signup.event_slug == slug))
            .await?;
        Ok(signups)
    }

    /// The same listing as [`Self::list_signups`], rendered as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when signups or site content cannot be read.
    pub async fn export_signups(&self, event_slug: Option<&str>) -> Result<CsvExport, SiteError> {
        let filter = event_slug.map(str::trim).filter(|s| !s.is_empty());
        let signups = self.list_signups(filter).await?;
        let content = self.content.load().await?;
        Ok(CsvExport {
            file_name: export_file_name(filter),
            body: render_signups_csv(&signups, &content),
        })
    }

    /// Every booking request, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when the bookings cannot be read.
    pub async fn list_bookings(&self) -> Result<Vec<BookingRequest>, SiteError> {
        Ok(self.bookings.list_all().await?)
    }
}
