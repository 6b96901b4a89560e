//! Site error types with HTTP status code mapping.
//!
//! [`SiteError`] is the central error type for request handling. Each
//! variant maps to a specific HTTP status code and structured JSON error
//! response.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::StoreError;

/// Message shown to callers when persistence fails on every backend.
const STORAGE_FAILURE_MESSAGE: &str =
    "Falha inesperada ao salvar os dados. Tente novamente em instantes.";

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "Informe um nome completo valido."
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`SiteError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request              |
/// | 2000–2999 | State/Not Found | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server          | 500 Internal Server Error    |
/// | 4000–4999 | Admin access    | 401 Unauthorized             |
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Submitted data failed a required-field or length rule.
    #[error("{0}")]
    InvalidRequest(String),

    /// No event with the given slug exists in the site content.
    #[error("Evento nao encontrado.")]
    EventNotFound(String),

    /// The event exists but its guest list no longer accepts names.
    #[error("{message}")]
    SignupClosed {
        /// Event slug.
        slug: String,
        /// Message configured for the closed list.
        message: String,
    },

    /// Admin secret missing or incorrect.
    #[error("Nao autorizado.")]
    Unauthorized,

    /// The server was started without an admin secret.
    #[error("ADMIN_DASHBOARD_KEY nao configurada no ambiente.")]
    AdminNotConfigured,

    /// Every storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl SiteError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::EventNotFound(_) => 2001,
            Self::SignupClosed { .. } => 2002,
            Self::Storage(_) => 3001,
            Self::AdminNotConfigured => 3002,
            Self::Unauthorized => 4001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::EventNotFound(_) => StatusCode::NOT_FOUND,
            Self::SignupClosed { .. } => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::AdminNotConfigured | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller. Server failures stay generic.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Storage(_) => STORAGE_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for SiteError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(format!("Corpo da requisicao invalido: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for SiteError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(format!("Parametros invalidos: {}", rejection.body_text()))
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
