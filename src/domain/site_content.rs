//! The editable site content document.
//!
//! One aggregate, persisted as a single JSON object, drives every public
//! page: hero and gallery images, the event list with its guest-list
//! settings, profile copy, social links, media players and contact info.
//! It is only ever replaced as a whole.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Document key of the site content.
pub const SITE_CONTENT_DOCUMENT: &str = "site-content.json";

/// `updatedAt` of a document that has never been saved.
pub const SEED_MARKER: &str = "seed";

/// Alt text used when an image has none.
pub const ARTIST_NAME: &str = "Ana Jones";

/// An image reference with its alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteImage {
    /// Public path or URL, never blank.
    pub src: String,
    /// Alt text.
    pub alt: String,
}

/// An event with a public landing page and guest list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DjEvent {
    /// URL slug, unique across events.
    pub slug: String,
    /// Event title.
    pub title: String,
    /// Machine-readable date.
    pub date_iso: String,
    /// Display date.
    pub date_label: String,
    /// Display time range.
    pub time_label: String,
    /// Venue.
    pub location: String,
    /// City and state.
    pub city: String,
    /// Long description.
    pub description: String,
    /// Bullet points shown on the landing page.
    pub highlights: Vec<String>,
    /// Guest-list rules.
    pub list_rules: Vec<String>,
    /// Cover image path.
    pub cover_image: String,
    /// Whether the guest list accepts new names.
    pub signup_open: bool,
    /// Shown instead of the form when the list is closed.
    pub signup_closed_message: String,
}

/// Biography and "about" copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    /// Line under the artist name in the hero.
    pub hero_subtitle: String,
    /// Short hero biography.
    pub hero_bio: String,
    /// Heading of the about section.
    pub about_title: String,
    /// First about paragraph.
    pub about_paragraph1: String,
    /// Second about paragraph.
    pub about_paragraph2: String,
    /// Home base.
    pub base: String,
    /// Main project.
    pub projeto: String,
    /// Performance format.
    pub formato: String,
    /// Booking reach.
    pub booking: String,
}

/// Links to the artist's profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteSocialLinks {
    /// Instagram profile.
    pub instagram: String,
    /// SoundCloud profile.
    pub soundcloud: String,
    /// Spotify artist page.
    pub spotify: String,
    /// YouTube channel.
    pub youtube: String,
}

/// An embedded player (SoundCloud, Spotify, YouTube...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteMediaEmbed {
    /// Card title, never blank.
    pub title: String,
    /// Card description, may be blank.
    pub description: String,
    /// Player URL, never blank.
    pub iframe: String,
}

/// Booking contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteContactInfo {
    /// Booking email.
    pub email: String,
    /// WhatsApp link.
    pub whatsapp: String,
    /// WhatsApp number as displayed.
    pub whatsapp_label: String,
    /// Copy above the booking form.
    pub booking_description: String,
}

/// The whole editable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    /// Rotating hero images, never empty.
    pub hero_images: Vec<SiteImage>,
    /// Gallery images, may be empty.
    pub gallery_images: Vec<SiteImage>,
    /// Events in display order.
    pub events: Vec<DjEvent>,
    /// Biography copy.
    pub profile: SiteProfile,
    /// Profile links.
    pub social_links: SiteSocialLinks,
    /// Embedded players.
    pub media_embeds: Vec<SiteMediaEmbed>,
    /// Contact details.
    pub contact_info: SiteContactInfo,
    /// ISO-8601 time of the last save, or `"seed"`.
    pub updated_at: String,
}

impl SiteContent {
    /// Looks up an event by slug. Surrounding whitespace is ignored and a
    /// blank slug matches nothing.
    #[must_use]
    pub fn event_by_slug(&self, slug: &str) -> Option<&DjEvent> {
        let slug = slug.trim();
        if slug.is_empty() {
            return None;
        }
        self.events.iter().find(|event| event.slug == slug)
    }

    /// `true` until the document has been saved once.
    #[must_use]
    pub fn is_seed(&self) -> bool {
        self.updated_at == SEED_MARKER
    }
}
