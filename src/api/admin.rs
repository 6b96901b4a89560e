//! Admin credential extraction.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::SiteError;

/// Header carrying the admin secret.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

#[derive(Debug, Deserialize)]
struct AdminKeyQuery {
    #[serde(rename = "adminKey")]
    admin_key: Option<String>,
}

/// Proof that the request presented the admin secret.
///
/// Taken from the `x-admin-key` header, or from the `adminKey` query
/// parameter for plain links such as the CSV download.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

fn presented_key(parts: &Parts) -> String {
    let header = parts
        .headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());
    if let Some(key) = header {
        return key.to_string();
    }
    Query::<AdminKeyQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(query)| query.admin_key)
        .unwrap_or_default()
}

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = SiteError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let key = presented_key(parts);
        state.admin_gate.authorize(Some(&key))?;
        Ok(Self)
    }
}
