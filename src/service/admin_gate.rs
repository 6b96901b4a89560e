//! Shared-secret gate for the admin dashboard operations.

use std::fmt;

use crate::error::SiteError;

/// Checks the operator secret presented with a protected request.
///
/// Built once from configuration. Without a configured secret every
/// check fails closed with [`SiteError::AdminNotConfigured`], whatever
/// the caller sends.
#[derive(Clone)]
pub struct AdminGate {
    secret: Option<String>,
}

impl fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl AdminGate {
    /// Creates a gate for `secret`. A blank secret counts as unset.
    #[must_use]
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Whether an operator secret is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Accepts `presented` only when it equals the configured secret.
    ///
    /// # Errors
    ///
    /// [`SiteError::AdminNotConfigured`] when no secret is configured,
    /// [`SiteError::Unauthorized`] when `presented` is absent or differs.
    pub fn authorize(&self, presented: Option<&str>) -> Result<(), SiteError> {
        let Some(secret) = self.secret.as_deref() else {
            tracing::error!("admin operation refused: ADMIN_DASHBOARD_KEY is not set");
            return Err(SiteError::AdminNotConfigured);
        };
        if presented == Some(secret) {
            Ok(())
        } else {
            tracing::warn!("admin operation refused: wrong key");
            Err(SiteError::Unauthorized)
        }
    }
}
