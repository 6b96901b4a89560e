//! OpenAPI document for the REST API.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::admin::ADMIN_KEY_HEADER;
use super::handlers::{bookings, events, signups, site_content, system};

/// Generated API description, served at `/api-docs/openapi.json`.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "artist-site",
        description = "Guest lists, booking requests and editable content for an artist's website."
    ),
    paths(
        signups::create_signup,
        signups::list_signups,
        bookings::create_booking,
        bookings::list_bookings,
        site_content::get_site_content,
        site_content::put_site_content,
        events::list_events,
        events::get_event,
        events::get_feed,
        system::health_handler,
    ),
    modifiers(&AdminKeyScheme),
    tags(
        (name = "Signups", description = "Event guest lists"),
        (name = "Bookings", description = "Booking inquiries"),
        (name = "Site content", description = "Editable site document"),
        (name = "Events", description = "Public event pages and social feed"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[derive(Debug)]
struct AdminKeyScheme;

impl Modify for AdminKeyScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_KEY_HEADER))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/event-signups",
            "/api/v1/booking-requests",
            "/api/v1/site-content",
            "/api/v1/events",
            "/api/v1/events/{slug}",
            "/api/v1/feed",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn admin_key_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let registered = doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("admin_key"));
        assert!(registered);
    }
}
