//! Domain layer: records, site content and its normalization.
//!
//! Signups and bookings are append-only records stamped with an id and a
//! creation time by their collection. The site content document is a
//! single aggregate that is normalized field by field against a built-in
//! default before it is served or stored.

pub mod booking;
pub mod normalize;
pub mod notification;
pub mod record;
pub mod record_id;
pub mod signup;
pub mod site_content;
pub mod site_defaults;

pub use booking::{BookingRequest, BookingRequestInput};
pub use notification::NotificationOutcome;
pub use record::{CollectionRecord, now_timestamp};
pub use record_id::RecordId;
pub use signup::{EventSignup, EventSignupInput, MAX_GUESTS, normalize_guest_count};
pub use site_content::{
    DjEvent, SITE_CONTENT_DOCUMENT, SiteContactInfo, SiteContent, SiteImage, SiteMediaEmbed,
    SiteProfile, SiteSocialLinks,
};
pub use site_defaults::default_site_content;
