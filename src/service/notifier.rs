//! Best-effort email notifications for new signups and bookings.
//!
//! Dispatch happens after the record is stored and never fails the
//! request: every error is folded into a [`NotificationOutcome`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::NotifyConfig;
use crate::domain::{BookingRequest, EventSignup, NotificationOutcome};

/// Reason reported when no provider is configured.
pub const NOT_CONFIGURED_REASON: &str = "notificacao por email nao configurada";

const NOT_GIVEN: &str = "Nao informado";
const NOT_GIVEN_FEMININE: &str = "Nao informada";

/// A rendered email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body, user text escaped.
    pub html: String,
    /// Plain-text body.
    pub text: String,
}

/// Delivery failure.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The request never completed.
    #[error("email provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("email provider returned {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, for the logs.
        body: String,
    },
}

impl NotifyError {
    /// Short reason safe to return to the submitter. Provider details stay
    /// in the logs.
    #[must_use]
    pub fn public_reason(&self) -> String {
        match self {
            Self::Transport(_) => "provedor de email indisponivel".to_string(),
            Self::Rejected { status, .. } => {
                format!("provedor de email recusou a mensagem (status {status})")
            }
        }
    }
}

/// Outbound email transport.
#[async_trait]
pub trait Notifier: Send + Sync + fmt::Debug + 'static {
    /// Delivers `message`.
    ///
    /// # Errors
    ///
    /// Returns a [`NotifyError`] when the message was not accepted.
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

/// [`Notifier`] for JSON email APIs (`POST {from, to, subject, html, text}`
/// with bearer authentication).
pub struct HttpEmailNotifier {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl fmt::Debug for HttpEmailNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpEmailNotifier")
            .field("api_url", &self.api_url)
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl HttpEmailNotifier {
    /// Creates a notifier posting to `api_url` as `from`.
    #[must_use]
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>, from: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("artist-site/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }

    /// Builds a notifier when both the API key and the sender are set.
    #[must_use]
    pub fn from_config(config: &NotifyConfig) -> Option<Self> {
        let api_key = config.api_key.as_deref()?;
        let from = config.from_address.as_deref()?;
        Some(Self::new(config.api_url.clone(), api_key, from))
    }
}

#[async_trait]
impl Notifier for HttpEmailNotifier {
    #[tracing::instrument(skip_all, fields(to = %message.to))]
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        let body = SendEmailBody {
            from: &self.from,
            to: [&message.to],
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
        };
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Renders and sends the team notifications.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    notifier: Option<Arc<dyn Notifier>>,
    signup_recipient: String,
    booking_recipient: String,
}

impl NotificationDispatcher {
    /// Creates a dispatcher. Without a notifier every dispatch is skipped.
    #[must_use]
    pub fn new(
        notifier: Option<Arc<dyn Notifier>>,
        signup_recipient: impl Into<String>,
        booking_recipient: impl Into<String>,
    ) -> Self {
        Self {
            notifier,
            signup_recipient: signup_recipient.into(),
            booking_recipient: booking_recipient.into(),
        }
    }

    /// Dispatcher over the HTTP provider described by `config`.
    #[must_use]
    pub fn from_config(config: &NotifyConfig) -> Self {
        let notifier = HttpEmailNotifier::from_config(config)
            .map(|notifier| Arc::new(notifier) as Arc<dyn Notifier>);
        if notifier.is_none() {
            tracing::info!("email notifications disabled (NOTIFY_API_KEY or NOTIFY_FROM_EMAIL unset)");
        }
        Self::new(
            notifier,
            config.signup_recipient.clone(),
            config.booking_recipient.clone(),
        )
    }

    /// Tells the team about a new guest-list name.
    pub async fn notify_signup(&self, signup: &EventSignup, event_title: &str) -> NotificationOutcome {
        let message = signup_message(&self.signup_recipient, signup, event_title);
        self.dispatch(message).await
    }

    /// Tells the team about a new booking request.
    pub async fn notify_booking(&self, booking: &BookingRequest) -> NotificationOutcome {
        let message = booking_message(&self.booking_recipient, booking);
        self.dispatch(message).await
    }

    async fn dispatch(&self, message: EmailMessage) -> NotificationOutcome {
        let Some(notifier) = &self.notifier else {
            return NotificationOutcome::skipped(NOT_CONFIGURED_REASON);
        };
        match notifier.send(&message).await {
            Ok(()) => {
                tracing::info!(to = %message.to, subject = %message.subject, "notification sent");
                NotificationOutcome::sent()
            }
            Err(err) => {
                tracing::warn!(to = %message.to, error = %err, "notification failed");
                NotificationOutcome::skipped(err.public_reason())
            }
        }
    }
}

/// Escapes text for interpolation into HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

fn render(to: &str, subject: String, heading: &str, fields: &[(&str, String)]) -> EmailMessage {
    let mut html = format!("<h2>{}</h2>\n", escape_html(heading));
    let mut text = format!("{heading}\n\n");
    for (label, value) in fields {
        html.push_str(&format!(
            "<p><strong>{label}:</strong> {}</p>\n",
            escape_html(value)
        ));
        text.push_str(&format!("{label}: {value}\n"));
    }
    EmailMessage {
        to: to.to_string(),
        subject,
        html,
        text: text.trim_end().to_string(),
    }
}

/// Email announcing a new guest-list signup.
#[must_use]
pub fn signup_message(to: &str, signup: &EventSignup, event_title: &str) -> EmailMessage {
    render(
        to,
        format!("Nova inscricao na lista - {event_title}"),
        "Nova inscricao recebida",
        &[
            ("Evento", event_title.to_string()),
            ("Nome", signup.name.clone()),
            ("Email", or_default(signup.email.as_deref(), NOT_GIVEN).to_string()),
            ("Telefone", or_default(signup.phone.as_deref(), NOT_GIVEN).to_string()),
            ("Cidade", or_default(signup.city.as_deref(), NOT_GIVEN_FEMININE).to_string()),
            ("Acompanhantes", signup.guest_count.to_string()),
            ("Mensagem", or_default(signup.notes.as_deref(), "Sem mensagem").to_string()),
            ("Enviado em", signup.created_at.clone()),
        ],
    )
}

/// Email announcing a new booking request.
#[must_use]
pub fn booking_message(to: &str, booking: &BookingRequest) -> EmailMessage {
    render(
        to,
        format!("Novo pedido de contratacao - {}", booking.name),
        "Novo pedido de contratacao",
        &[
            ("Nome", booking.name.clone()),
            ("Email", or_default(booking.email.as_deref(), NOT_GIVEN).to_string()),
            ("Telefone", or_default(booking.phone.as_deref(), NOT_GIVEN).to_string()),
            ("Tipo de evento", booking.event_type.clone()),
            (
                "Data prevista",
                or_default(booking.event_date.as_deref(), NOT_GIVEN_FEMININE).to_string(),
            ),
            ("Cidade", or_default(booking.city.as_deref(), NOT_GIVEN_FEMININE).to_string()),
            ("Briefing", or_default(booking.message.as_deref(), "Sem briefing").to_string()),
            ("Enviado em", booking.created_at.clone()),
        ],
    )
}
