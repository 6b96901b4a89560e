//! DTOs for site content, events and the social feed.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DjEvent, SiteContent};
use crate::service::FeedPost;

/// The normalized site document.
#[derive(Debug, Serialize, ToSchema)]
pub struct SiteContentResponse {
    /// Current content.
    pub data: SiteContent,
}

/// Response for a content replacement.
#[derive(Debug, Serialize, ToSchema)]
pub struct SiteContentSavedResponse {
    /// Confirmation text.
    pub message: String,
    /// The content as stored.
    pub data: SiteContent,
}

impl From<SiteContent> for SiteContentSavedResponse {
    fn from(data: SiteContent) -> Self {
        Self {
            message: "Conteudo atualizado com sucesso.".to_string(),
            data,
        }
    }
}

/// Events in display order.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventListResponse {
    /// Events.
    pub data: Vec<DjEvent>,
}

/// One event.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    /// The event.
    pub data: DjEvent,
}

/// Query parameters for `GET /api/v1/feed`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedParams {
    /// Number of posts, `1..=25`, default 6.
    pub limit: Option<usize>,
}

/// Recent social posts.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedResponse {
    /// Posts, never empty.
    pub data: Vec<FeedPost>,
}
