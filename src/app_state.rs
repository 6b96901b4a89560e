//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::domain::default_site_content;
use crate::service::{
    AdminGate, FeedClient, NotificationDispatcher, SiteContentService, SubmissionService,
};
use crate::store::DocumentStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Signup and booking submissions and listings.
    pub submissions: Arc<SubmissionService>,
    /// Site content document.
    pub content: Arc<SiteContentService>,
    /// Admin secret check.
    pub admin_gate: Arc<AdminGate>,
    /// Social feed.
    pub feed: Arc<FeedClient>,
}

impl AppState {
    /// Wires every service over `store`.
    #[must_use]
    pub fn new(
        store: Arc<DocumentStore>,
        notifications: NotificationDispatcher,
        admin_gate: AdminGate,
        feed: FeedClient,
    ) -> Self {
        let content = SiteContentService::new(Arc::clone(&store), default_site_content());
        let submissions = SubmissionService::new(store, content.clone(), notifications);
        Self {
            submissions: Arc::new(submissions),
            content: Arc::new(content),
            admin_gate: Arc::new(admin_gate),
            feed: Arc::new(feed),
        }
    }

    /// Builds the production state: remote bucket when configured, local
    /// data directory as fallback.
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        let store = DocumentStore::from_config(config.remote_store.as_ref(), &config.data_dir);
        Self::new(
            Arc::new(store),
            NotificationDispatcher::from_config(&config.notify),
            AdminGate::new(config.admin_key.clone()),
            FeedClient::new(config.feed.clone()),
        )
    }
}
