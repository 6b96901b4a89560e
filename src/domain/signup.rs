//! Guest-list signups for a single event.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{CollectionRecord, RecordId};

/// Most companions a single signup may bring.
pub const MAX_GUESTS: u8 = 2;

/// A name on an event's guest list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSignup {
    /// Assigned identifier.
    pub id: RecordId,
    /// Slug of the event the signup belongs to.
    pub event_slug: String,
    /// Full name as given.
    pub name: String,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Home city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Companions, `0..=2`. Stored values outside that shape are coerced.
    #[serde(default, deserialize_with = "stored_guest_count")]
    pub guest_count: u8,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// Validated fields of a new signup.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSignupInput {
    /// Slug of an existing event.
    pub event_slug: String,
    /// Trimmed name, at least three characters.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Home city.
    pub city: Option<String>,
    /// Companions, already clamped.
    pub guest_count: u8,
    /// Free-form note.
    pub notes: Option<String>,
}

impl CollectionRecord for EventSignup {
    const DOCUMENT: &'static str = "event-signups.json";

    type Input = EventSignupInput;

    fn assemble(id: RecordId, created_at: String, input: Self::Input) -> Self {
        Self {
            id,
            event_slug: input.event_slug,
            name: input.name,
            email: input.email,
            phone: input.phone,
            city: input.city,
            guest_count: input.guest_count.min(MAX_GUESTS),
            notes: input.notes,
            created_at,
        }
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Coerces an untrusted guest count into `0..=MAX_GUESTS`.
///
/// Numbers and numeric strings are accepted (fractions round down);
/// booleans count as `1`/`0`. Anything non-numeric or negative is `0`,
/// anything above the limit is the limit.
#[must_use]
pub fn normalize_guest_count(value: Option<&Value>) -> u8 {
    let parsed = match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
    };

    if parsed.is_nan() || parsed < 1.0 {
        0
    } else if parsed < 2.0 {
        1
    } else {
        MAX_GUESTS
    }
}

fn stored_guest_count<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(normalize_guest_count(Some(&raw)))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn guest_count_is_clamped_to_two() {
        assert_eq!(normalize_guest_count(Some(&json!(5))), 2);
        assert_eq!(normalize_guest_count(Some(&json!(2))), 2);
        assert_eq!(normalize_guest_count(Some(&json!("7"))), 2);
    }

    #[test]
    fn negative_and_non_numeric_guest_counts_are_zero() {
        assert_eq!(normalize_guest_count(Some(&json!(-3))), 0);
        assert_eq!(normalize_guest_count(Some(&json!("abc"))), 0);
        assert_eq!(normalize_guest_count(Some(&json!({"n": 1}))), 0);
        assert_eq!(normalize_guest_count(Some(&json!(null))), 0);
        assert_eq!(normalize_guest_count(None), 0);
    }

    #[test]
    fn numeric_strings_and_fractions() {
        assert_eq!(normalize_guest_count(Some(&json!(" 1 "))), 1);
        assert_eq!(normalize_guest_count(Some(&json!(1.9))), 1);
        assert_eq!(normalize_guest_count(Some(&json!(true))), 1);
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let signup = EventSignup::assemble(
            RecordId::new(),
            "2026-02-01T10:00:00.000Z".to_string(),
            EventSignupInput {
                event_slug: "sunset".to_string(),
                name: "Maria Silva".to_string(),
                email: None,
                phone: Some("+55 61 90000-0000".to_string()),
                city: None,
                guest_count: 1,
                notes: None,
            },
        );
        let Ok(value) = serde_json::to_value(&signup) else {
            panic!("serialization failed");
        };
        assert_eq!(value.get("eventSlug"), Some(&json!("sunset")));
        assert_eq!(value.get("guestCount"), Some(&json!(1)));
        assert!(value.get("email").is_none());
        assert!(value.get("phone").is_some());
    }

    #[test]
    fn stored_fractional_guest_count_still_decodes() {
        let stored = json!({
            "id": "legado",
            "eventSlug": "sunset",
            "name": "Maria Silva",
            "guestCount": 1.5,
            "createdAt": "2025-11-01T10:00:00.000Z"
        });
        let Ok(signup) = serde_json::from_value::<EventSignup>(stored) else {
            panic!("fractional guest count should decode");
        };
        assert_eq!(signup.guest_count, 1);

        let Ok(signup) = serde_json::from_value::<EventSignup>(json!({
            "id": "texto",
            "eventSlug": "sunset",
            "name": "Maria Silva",
            "guestCount": "9",
            "createdAt": "2025-11-01T10:00:00.000Z"
        })) else {
            panic!("string guest count should decode");
        };
        assert_eq!(signup.guest_count, MAX_GUESTS);
    }
}
