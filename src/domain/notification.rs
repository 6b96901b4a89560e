//! Result of a best-effort notification.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether the team was told about a new record, and if not, why.
///
/// Returned next to the created record. A failed notification is
/// informational only: the record is already stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotificationOutcome {
    /// `true` when the provider accepted the message.
    pub sent: bool,
    /// Why nothing was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl NotificationOutcome {
    /// The message was handed to the provider.
    #[must_use]
    pub fn sent() -> Self {
        Self {
            sent: true,
            reason: None,
        }
    }

    /// Nothing was sent.
    #[must_use]
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            sent: false,
            reason: Some(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sent_outcome_omits_reason() {
        let value = serde_json::to_value(NotificationOutcome::sent()).ok();
        assert_eq!(value, Some(json!({"sent": true})));
    }

    #[test]
    fn skipped_outcome_carries_reason() {
        let value = serde_json::to_value(NotificationOutcome::skipped("offline")).ok();
        assert_eq!(value, Some(json!({"sent": false, "reason": "offline"})));
    }
}
