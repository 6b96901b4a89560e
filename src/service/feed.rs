//! Recent social posts for the home page.
//!
//! The provider is optional. Without a token, or whenever the provider
//! fails or returns nothing, a fixed list of artist images is served so
//! the section never renders empty.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::FeedConfig;

/// Posts returned when the caller does not ask for a count.
pub const DEFAULT_FEED_LIMIT: usize = 6;

/// Upper bound on the requested count.
pub const MAX_FEED_LIMIT: usize = 25;

const GRAPH_MEDIA_URL: &str = "https://graph.instagram.com/me/media";
const GRAPH_FIELDS: &str = "id,caption,media_url,thumbnail_url,media_type,permalink";
const DEFAULT_CAPTION: &str = "Post recente da Ana Jones";

const FALLBACK_MEDIA: [(&str, &str); 6] = [
    ("/gallery/real/ana-zamna-festival.jpeg", "Ana Jones no Zamna Festival"),
    ("/gallery/real/ana-dreams-release.jpg", "Lancamento do EP Dreams"),
    ("/gallery/real/ana-clubinho-goiania-artwork.png", "Clubinho Room Ed. Goiania"),
    (
        "/gallery/real/artworks-MyVfYpeTrDzKDT2m-G36AhA-t1080x1080.jpg",
        "Techno Connection Radio #025",
    ),
    (
        "/gallery/real/artworks-QAlcAWzmLyqFfcWx-MWgViQ-t1080x1080.png",
        "Kaluts, Ana Jones - Sente/Febre",
    ),
    ("/gallery/real/ana-soundcloud-visual.jpg", "Visual oficial da Ana Jones"),
];

/// A post as shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    /// Provider id, or `fallback-N`.
    pub id: String,
    /// Image to display.
    pub media_url: String,
    /// Link to the post.
    pub permalink: String,
    /// Caption.
    pub caption: String,
}

#[derive(Debug, Deserialize)]
struct MediaPage {
    #[serde(default)]
    data: Vec<MediaItem>,
}

#[derive(Debug, Deserialize)]
struct MediaItem {
    id: String,
    caption: Option<String>,
    media_url: Option<String>,
    thumbnail_url: Option<String>,
    media_type: Option<String>,
    permalink: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum FeedError {
    #[error("invalid feed url: {0}")]
    Url(String),
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Clamps a requested post count to `1..=MAX_FEED_LIMIT`.
#[must_use]
pub fn clamp_limit(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_FEED_LIMIT)
        .clamp(1, MAX_FEED_LIMIT)
}

/// Client for the media endpoint of the social provider.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    config: FeedConfig,
    endpoint: String,
}

impl FeedClient {
    /// Creates a client for `config`.
    #[must_use]
    pub fn new(config: FeedConfig) -> Self {
        Self::with_endpoint(config, GRAPH_MEDIA_URL)
    }

    /// Creates a client against another media endpoint.
    #[must_use]
    pub fn with_endpoint(config: FeedConfig, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            endpoint: endpoint.into(),
        }
    }

    /// Up to `limit` recent posts; never empty.
    pub async fn recent_posts(&self, limit: usize) -> Vec<FeedPost> {
        let Some(token) = self.config.access_token.as_deref() else {
            return self.fallback_posts(limit);
        };
        match self.fetch(token).await {
            Ok(items) => {
                let posts = self.to_posts(items, limit);
                if posts.is_empty() {
                    self.fallback_posts(limit)
                } else {
                    posts
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "feed unavailable, serving fallback posts");
                self.fallback_posts(limit)
            }
        }
    }

    /// The built-in posts, truncated to `limit`.
    #[must_use]
    pub fn fallback_posts(&self, limit: usize) -> Vec<FeedPost> {
        FALLBACK_MEDIA
            .iter()
            .zip(1..)
            .take(limit)
            .map(|((media_url, caption), n)| FeedPost {
                id: format!("fallback-{n}"),
                media_url: (*media_url).to_string(),
                permalink: self.config.profile_url.clone(),
                caption: (*caption).to_string(),
            })
            .collect()
    }

    async fn fetch(&self, token: &str) -> Result<Vec<MediaItem>, FeedError> {
        let url = reqwest::Url::parse_with_params(
            &self.endpoint,
            &[("fields", GRAPH_FIELDS), ("access_token", token)],
        )
        .map_err(|e| FeedError::Url(e.to_string()))?;
        let page: MediaPage = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page.data)
    }

    fn to_posts(&self, items: Vec<MediaItem>, limit: usize) -> Vec<FeedPost> {
        let default_media = FALLBACK_MEDIA.first().map_or("", |(url, _)| *url);
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        items
            .into_iter()
            .take(limit)
            .map(|item| {
                let media = if item.media_type.as_deref() == Some("VIDEO") {
                    item.thumbnail_url
                } else {
                    item.media_url
                };
                FeedPost {
                    id: item.id,
                    media_url: present(media).unwrap_or_else(|| default_media.to_string()),
                    permalink: present(item.permalink)
                        .unwrap_or_else(|| self.config.profile_url.clone()),
                    caption: present(item.caption).unwrap_or_else(|| DEFAULT_CAPTION.to_string()),
                }
            })
            .collect()
    }
}
