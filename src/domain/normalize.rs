//! Field-by-field normalization of untrusted site content.
//!
//! Every function takes the raw value (possibly absent) plus the fallback
//! for that field and never fails: a malformed field is replaced by its
//! fallback, a malformed list entry is dropped, and the rest of the
//! document is kept.

use serde_json::Value;

use super::site_content::{
    ARTIST_NAME, DjEvent, SiteContactInfo, SiteContent, SiteImage, SiteMediaEmbed, SiteProfile,
    SiteSocialLinks,
};

/// What an image list becomes when every entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyImages {
    /// Substitute the fallback list (hero images).
    UseFallback,
    /// Keep the empty list (gallery images).
    Keep,
}

/// Trimmed string, or `""` for anything that is not a string.
fn trimmed(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).map_or("", str::trim)
}

/// String rule: trim, substituting `fallback` when blank or not a string.
#[must_use]
pub fn normalize_text(value: Option<&Value>, fallback: &str) -> String {
    let text = trimmed(value);
    if text.is_empty() {
        fallback.to_string()
    } else {
        text.to_string()
    }
}

/// Boolean rule: native booleans, `1`/`0`, or `"true"`/`"false"` in any
/// case. Anything else is `fallback`.
#[must_use]
pub fn normalize_bool(value: Option<&Value>, fallback: bool) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => match number.as_f64() {
            Some(n) if n == 1.0 => true,
            Some(n) if n == 0.0 => false,
            _ => fallback,
        },
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("true") {
                true
            } else if text.eq_ignore_ascii_case("false") {
                false
            } else {
                fallback
            }
        }
        _ => fallback,
    }
}

/// String-list rule: entries trimmed, blanks and non-strings dropped.
/// Anything that is not a list means "nothing configured" and yields an
/// empty list.
#[must_use]
pub fn normalize_string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| trimmed(Some(item)))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes each entry of a list with `entry`, dropping the ones it
/// rejects. A value that is not a list yields a copy of `fallback`.
pub fn normalize_entries<T, F>(value: Option<&Value>, fallback: &[T], entry: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&Value) -> Option<T>,
{
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(entry).collect(),
        _ => fallback.to_vec(),
    }
}

/// One image entry: requires a non-blank `src`; blank `alt` becomes the
/// artist name.
#[must_use]
pub fn normalize_image(value: &Value) -> Option<SiteImage> {
    if !value.is_object() {
        return None;
    }
    let src = trimmed(value.get("src"));
    if src.is_empty() {
        return None;
    }
    Some(SiteImage {
        src: src.to_string(),
        alt: normalize_text(value.get("alt"), ARTIST_NAME),
    })
}

/// Image-list rule. `on_empty` decides whether a list with no valid entry
/// is kept or replaced by `fallback`.
#[must_use]
pub fn normalize_images(
    value: Option<&Value>,
    fallback: &[SiteImage],
    on_empty: EmptyImages,
) -> Vec<SiteImage> {
    let images = normalize_entries(value, fallback, normalize_image);
    if images.is_empty() && on_empty == EmptyImages::UseFallback {
        fallback.to_vec()
    } else {
        images
    }
}

/// One event entry. Dropped when `slug`, `title`, `dateIso` or
/// `dateLabel` is blank; `signupOpen` defaults to `true`.
#[must_use]
pub fn normalize_event(value: &Value) -> Option<DjEvent> {
    if !value.is_object() {
        return None;
    }
    let text = |key: &str| normalize_text(value.get(key), "");
    let event = DjEvent {
        slug: text("slug"),
        title: text("title"),
        date_iso: text("dateIso"),
        date_label: text("dateLabel"),
        time_label: text("timeLabel"),
        location: text("location"),
        city: text("city"),
        description: text("description"),
        highlights: normalize_string_list(value.get("highlights")),
        list_rules: normalize_string_list(value.get("listRules")),
        cover_image: text("coverImage"),
        signup_open: normalize_bool(value.get("signupOpen"), true),
        signup_closed_message: text("signupClosedMessage"),
    };
    let complete = [&event.slug, &event.title, &event.date_iso, &event.date_label]
        .iter()
        .all(|field| !field.is_empty());
    complete.then_some(event)
}

/// One media embed. Dropped when `title` or `iframe` is blank.
#[must_use]
pub fn normalize_media_embed(value: &Value) -> Option<SiteMediaEmbed> {
    let title = trimmed(value.get("title"));
    let iframe = trimmed(value.get("iframe"));
    if title.is_empty() || iframe.is_empty() {
        return None;
    }
    Some(SiteMediaEmbed {
        title: title.to_string(),
        description: trimmed(value.get("description")).to_string(),
        iframe: iframe.to_string(),
    })
}

/// Profile copy, each leaf against its fallback.
#[must_use]
pub fn normalize_profile(value: Option<&Value>, fallback: &SiteProfile) -> SiteProfile {
    let leaf = |key: &str, fallback: &str| normalize_text(value.and_then(|v| v.get(key)), fallback);
    SiteProfile {
        hero_subtitle: leaf("heroSubtitle", &fallback.hero_subtitle),
        hero_bio: leaf("heroBio", &fallback.hero_bio),
        about_title: leaf("aboutTitle", &fallback.about_title),
        about_paragraph1: leaf("aboutParagraph1", &fallback.about_paragraph1),
        about_paragraph2: leaf("aboutParagraph2", &fallback.about_paragraph2),
        base: leaf("base", &fallback.base),
        projeto: leaf("projeto", &fallback.projeto),
        formato: leaf("formato", &fallback.formato),
        booking: leaf("booking", &fallback.booking),
    }
}

/// Social links, each leaf against its fallback.
#[must_use]
pub fn normalize_social_links(value: Option<&Value>, fallback: &SiteSocialLinks) -> SiteSocialLinks {
    let leaf = |key: &str, fallback: &str| normalize_text(value.and_then(|v| v.get(key)), fallback);
    SiteSocialLinks {
        instagram: leaf("instagram", &fallback.instagram),
        soundcloud: leaf("soundcloud", &fallback.soundcloud),
        spotify: leaf("spotify", &fallback.spotify),
        youtube: leaf("youtube", &fallback.youtube),
    }
}

/// Contact details, each leaf against its fallback.
#[must_use]
pub fn normalize_contact_info(value: Option<&Value>, fallback: &SiteContactInfo) -> SiteContactInfo {
    let leaf = |key: &str, fallback: &str| normalize_text(value.and_then(|v| v.get(key)), fallback);
    SiteContactInfo {
        email: leaf("email", &fallback.email),
        whatsapp: leaf("whatsapp", &fallback.whatsapp),
        whatsapp_label: leaf("whatsappLabel", &fallback.whatsapp_label),
        booking_description: leaf("bookingDescription", &fallback.booking_description),
    }
}

/// Builds a complete document from `value`, taking every missing or
/// malformed field from `fallback`. A value that is not an object yields
/// `fallback` unchanged.
///
/// `updatedAt` is taken from the input when present; saving overwrites it
/// afterwards.
#[must_use]
pub fn normalize_content(value: &Value, fallback: &SiteContent) -> SiteContent {
    if !value.is_object() {
        return fallback.clone();
    }
    SiteContent {
        hero_images: normalize_images(
            value.get("heroImages"),
            &fallback.hero_images,
            EmptyImages::UseFallback,
        ),
        gallery_images: normalize_images(
            value.get("galleryImages"),
            &fallback.gallery_images,
            EmptyImages::Keep,
        ),
        events: normalize_entries(value.get("events"), &fallback.events, normalize_event),
        profile: normalize_profile(value.get("profile"), &fallback.profile),
        social_links: normalize_social_links(value.get("socialLinks"), &fallback.social_links),
        media_embeds: normalize_entries(
            value.get("mediaEmbeds"),
            &fallback.media_embeds,
            normalize_media_embed,
        ),
        contact_info: normalize_contact_info(value.get("contactInfo"), &fallback.contact_info),
        updated_at: normalize_text(value.get("updatedAt"), &fallback.updated_at),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::site_defaults::default_site_content;

    fn as_value(content: &SiteContent) -> Value {
        let Ok(value) = serde_json::to_value(content) else {
            panic!("site content must serialize");
        };
        value
    }

    #[test]
    fn non_object_input_yields_fallback() {
        let fallback = default_site_content();
        assert_eq!(normalize_content(&json!("nope"), &fallback), fallback);
        assert_eq!(normalize_content(&Value::Null, &fallback), fallback);
        assert_eq!(normalize_content(&json!([1, 2]), &fallback), fallback);
    }

    #[test]
    fn normalized_document_is_a_fixed_point() {
        let fallback = default_site_content();
        let once = normalize_content(&as_value(&fallback), &fallback);
        let twice = normalize_content(&as_value(&once), &fallback);
        assert_eq!(once, fallback);
        assert_eq!(twice, once);
    }

    #[test]
    fn text_is_trimmed_and_blank_falls_back() {
        assert_eq!(normalize_text(Some(&json!("  hi  ")), "x"), "hi");
        assert_eq!(normalize_text(Some(&json!("   ")), "x"), "x");
        assert_eq!(normalize_text(Some(&json!(42)), "x"), "x");
        assert_eq!(normalize_text(None, ""), "");
    }

    #[test]
    fn booleans_accept_common_encodings() {
        assert!(normalize_bool(Some(&json!(true)), false));
        assert!(normalize_bool(Some(&json!(1)), false));
        assert!(!normalize_bool(Some(&json!(0)), true));
        assert!(normalize_bool(Some(&json!(" TRUE ")), false));
        assert!(!normalize_bool(Some(&json!("False")), true));
        assert!(normalize_bool(Some(&json!("yes")), true));
        assert!(!normalize_bool(Some(&json!(2)), false));
        assert!(normalize_bool(None, true));
    }

    #[test]
    fn string_lists_drop_blanks_and_ignore_non_lists() {
        let list = normalize_string_list(Some(&json!([" a ", "", 3, "b", "  "])));
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
        assert!(normalize_string_list(Some(&json!("a, b"))).is_empty());
        assert!(normalize_string_list(None).is_empty());
    }

    #[test]
    fn hero_images_never_end_up_empty() {
        let fallback = default_site_content();
        let mut raw = as_value(&fallback);
        if let Some(object) = raw.as_object_mut() {
            object.insert("heroImages".to_string(), json!([]));
        }
        let content = normalize_content(&raw, &fallback);
        assert_eq!(content.hero_images, fallback.hero_images);
    }

    #[test]
    fn hero_images_with_only_invalid_entries_fall_back() {
        let fallback = default_site_content();
        let images = normalize_images(
            Some(&json!([{"src": "  "}, "plain", null])),
            &fallback.hero_images,
            EmptyImages::UseFallback,
        );
        assert_eq!(images, fallback.hero_images);
    }

    #[test]
    fn gallery_may_be_cleared() {
        let fallback = default_site_content();
        let mut raw = as_value(&fallback);
        if let Some(object) = raw.as_object_mut() {
            object.insert("galleryImages".to_string(), json!([]));
        }
        let content = normalize_content(&raw, &fallback);
        assert!(content.gallery_images.is_empty());
        assert_eq!(content.hero_images, fallback.hero_images);
    }

    #[test]
    fn missing_image_list_uses_fallback() {
        let fallback = default_site_content();
        let content = normalize_content(&json!({}), &fallback);
        assert_eq!(content.gallery_images, fallback.gallery_images);
        assert_eq!(content.events, fallback.events);
    }

    #[test]
    fn image_entries_are_validated_individually() {
        let images = normalize_images(
            Some(&json!([
                {"src": " /a.jpg ", "alt": " A "},
                {"src": ""},
                {"src": "/b.jpg", "alt": "   "},
                "not-an-object"
            ])),
            &[],
            EmptyImages::Keep,
        );
        assert_eq!(images.len(), 2);
        assert_eq!(images.first().map(|i| i.src.as_str()), Some("/a.jpg"));
        assert_eq!(images.first().map(|i| i.alt.as_str()), Some("A"));
        assert_eq!(images.get(1).map(|i| i.alt.as_str()), Some(ARTIST_NAME));
    }

    #[test]
    fn malformed_event_is_dropped_and_everything_else_kept() {
        let fallback = default_site_content();
        let mut raw = as_value(&fallback);
        let Some(events) = raw.get_mut("events").and_then(Value::as_array_mut) else {
            panic!("events must be an array");
        };
        events.push(json!({"title": "No slug", "dateIso": "2026-01-01", "dateLabel": "1 jan"}));
        if let Some(profile) = raw.get_mut("profile").and_then(Value::as_object_mut) {
            profile.insert("heroBio".to_string(), json!("Nova bio"));
        }

        let content = normalize_content(&raw, &fallback);
        assert_eq!(content.events, fallback.events);
        assert_eq!(content.profile.hero_bio, "Nova bio");
        assert_eq!(content.profile.base, fallback.profile.base);
        assert_eq!(content.media_embeds, fallback.media_embeds);
    }

    #[test]
    fn events_may_be_cleared() {
        let fallback = default_site_content();
        let content = normalize_content(&json!({"events": []}), &fallback);
        assert!(content.events.is_empty());
    }

    #[test]
    fn event_sub_fields_are_normalized() {
        let Some(event) = normalize_event(&json!({
            "slug": " festa ",
            "title": "Festa",
            "dateIso": "2026-05-01",
            "dateLabel": "1 de maio",
            "highlights": ["  DJ set ", ""],
            "listRules": "not a list",
            "signupOpen": "false",
            "signupClosedMessage": " Esgotado "
        })) else {
            panic!("event should be valid");
        };
        assert_eq!(event.slug, "festa");
        assert_eq!(event.highlights, vec!["DJ set".to_string()]);
        assert!(event.list_rules.is_empty());
        assert_eq!(event.time_label, "");
        assert!(!event.signup_open);
        assert_eq!(event.signup_closed_message, "Esgotado");
    }

    #[test]
    fn event_signup_defaults_to_open() {
        let Some(event) = normalize_event(&json!({
            "slug": "a", "title": "b", "dateIso": "c", "dateLabel": "d"
        })) else {
            panic!("event should be valid");
        };
        assert!(event.signup_open);
    }

    #[test]
    fn media_embeds_require_title_and_iframe() {
        let embeds = normalize_entries(
            Some(&json!([
                {"title": "Set", "iframe": "https://x", "description": ""},
                {"title": "", "iframe": "https://y"},
                {"title": "No player"}
            ])),
            &[],
            normalize_media_embed,
        );
        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds.first().map(|e| e.description.as_str()), Some(""));
    }

    #[test]
    fn flat_records_fall_back_per_leaf() {
        let fallback = default_site_content();
        let links = normalize_social_links(
            Some(&json!({"instagram": " https://instagram.com/outra ", "youtube": ""})),
            &fallback.social_links,
        );
        assert_eq!(links.instagram, "https://instagram.com/outra");
        assert_eq!(links.youtube, fallback.social_links.youtube);

        let contact = normalize_contact_info(Some(&json!("garbage")), &fallback.contact_info);
        assert_eq!(contact, fallback.contact_info);
    }

    #[test]
    fn updated_at_defaults_to_seed() {
        let fallback = default_site_content();
        let content = normalize_content(&json!({"updatedAt": "  "}), &fallback);
        assert!(content.is_seed());
        let content = normalize_content(&json!({"updatedAt": "2026-01-01T00:00:00.000Z"}), &fallback);
        assert_eq!(content.updated_at, "2026-01-01T00:00:00.000Z");
    }
}
