//! Load and replace the site content document.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::normalize::normalize_content;
use crate::domain::{DjEvent, SITE_CONTENT_DOCUMENT, SiteContent, now_timestamp};
use crate::store::{DocumentStore, StoreError};

/// Serves the normalized site content and applies admin replacements.
///
/// The stored document is never trusted: every load runs it through
/// [`normalize_content`] against the built-in defaults.
#[derive(Debug, Clone)]
pub struct SiteContentService {
    store: Arc<DocumentStore>,
    defaults: Arc<SiteContent>,
}

impl SiteContentService {
    /// Creates a service that falls back to `defaults`.
    #[must_use]
    pub fn new(store: Arc<DocumentStore>, defaults: SiteContent) -> Self {
        Self {
            store,
            defaults: Arc::new(defaults),
        }
    }

    /// The current document, or the defaults if it was never saved.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when no backend could be read.
    pub async fn load(&self) -> Result<SiteContent, StoreError> {
        let seed = serde_json::to_value(self.defaults.as_ref()).map_err(|source| {
            StoreError::Encode {
                key: SITE_CONTENT_DOCUMENT.to_string(),
                source,
            }
        })?;
        let raw = self.store.read_json(SITE_CONTENT_DOCUMENT, seed).await?;
        Ok(normalize_content(&raw, &self.defaults))
    }

    /// Normalizes `raw`, stamps it with the current time and replaces the
    /// stored document with it.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when every backend refuses the write.
    pub async fn save(&self, raw: &Value) -> Result<SiteContent, StoreError> {
        let mut content = normalize_content(raw, &self.defaults);
        content.updated_at = now_timestamp();
        self.store.write_json(SITE_CONTENT_DOCUMENT, &content).await?;

        tracing::info!(
            events = content.events.len(),
            hero_images = content.hero_images.len(),
            gallery_images = content.gallery_images.len(),
            updated_at = %content.updated_at,
            "site content saved"
        );
        Ok(content)
    }

    /// Events in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when no backend could be read.
    pub async fn events(&self) -> Result<Vec<DjEvent>, StoreError> {
        Ok(self.load().await?.events)
    }

    /// One event by slug; blank or unknown slugs yield `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when no backend could be read.
    pub async fn event_by_slug(&self, slug: &str) -> Result<Option<DjEvent>, StoreError> {
        if slug.trim().is_empty() {
            return Ok(None);
        }
        Ok(self.load().await?.event_by_slug(slug).cloned())
    }
}
