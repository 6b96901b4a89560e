//! Shared shape of append-only record collections.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::RecordId;

/// A record stored in an append-only JSON array document.
///
/// The collection owns identity and creation time: callers hand over an
/// [`CollectionRecord::Input`] and get back the stamped record.
pub trait CollectionRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Document key of the collection (e.g. `"event-signups.json"`).
    const DOCUMENT: &'static str;

    /// Validated caller-provided fields.
    type Input: Send;

    /// Builds the stored record from its input plus assigned identity.
    fn assemble(id: RecordId, created_at: String, input: Self::Input) -> Self;

    /// ISO-8601 creation timestamp.
    fn created_at(&self) -> &str;
}

/// Current wall-clock time as a fixed-width UTC ISO-8601 string.
///
/// Always `YYYY-MM-DDTHH:MM:SS.mmmZ`, so lexicographic order matches
/// chronological order.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_fixed_width_utc() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.get(10..11), Some("T"));
    }

    #[test]
    fn timestamps_sort_chronologically() {
        let earlier = now_timestamp();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let later = now_timestamp();
        assert!(later > earlier);
    }
}
