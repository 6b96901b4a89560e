//! # artist-site
//!
//! Backend of a performing artist's promotional website: event guest
//! lists, booking inquiries, and the editable content document behind
//! every public page.
//!
//! Documents are stored as JSON in an S3 bucket when one is configured,
//! with a local data directory as fallback. New signups and bookings are
//! announced to the team by email on a best-effort basis.
//!
//! ## Architecture
//!
//! ```text
//! Clients (site, admin dashboard)
//!     │
//!     ├── REST Handlers (api/)  ── AdminAccess (x-admin-key)
//!     │
//!     ├── SubmissionService / SiteContentService (service/)
//!     ├── NotificationDispatcher ── email provider
//!     │
//!     ├── RecordCollection, normalization (service/, domain/)
//!     │
//!     └── DocumentStore (store/)
//!             ├── S3Backend
//!             └── LocalFsBackend
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod store;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// The complete HTTP application: API routes plus tracing and CORS layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::FeedConfig;
    use crate::service::{AdminGate, FeedClient, NotificationDispatcher};
    use crate::store::{DocumentStore, MemoryBackend, StorageBackend};

    const ADMIN_KEY: &str = "chave-admin";

    fn test_app(admin_key: Option<&str>) -> Router {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::seeding());
        let state = AppState::new(
            Arc::new(DocumentStore::new(vec![backend])),
            NotificationDispatcher::new(None, "a@example.com", "b@example.com"),
            AdminGate::new(admin_key.map(str::to_string)),
            FeedClient::new(FeedConfig {
                access_token: None,
                profile_url: "https://instagram.com/perfil".to_string(),
            }),
        );
        app(state)
    }

    fn request(method: &str, uri: &str, admin: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(key) = admin {
            builder = builder.header("x-admin-key", key);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let Ok(request) = builder.body(body) else {
            panic!("request should build");
        };
        request
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("router is infallible");
        };
        response
    }

    async fn body_text(response: Response) -> String {
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body should be readable");
        };
        String::from_utf8_lossy(&bytes).into_owned()
    }

    async fn body_json(response: Response) -> Value {
        let text = body_text(response).await;
        let Ok(value) = serde_json::from_str(&text) else {
            panic!("body is not JSON: {text}");
        };
        value
    }

    #[tokio::test]
    async fn health_reports_version() {
        let app = test_app(None);
        let response = send(&app, request("GET", "/health", None, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.get("status"), Some(&json!("healthy")));
        assert_eq!(body.get("version"), Some(&json!(env!("CARGO_PKG_VERSION"))));
    }

    #[tokio::test]
    async fn signup_round_trip_through_admin_listing() {
        let app = test_app(Some(ADMIN_KEY));
        let response = send(
            &app,
            request(
                "POST",
                "/api/v1/event-signups",
                None,
                Some(json!({
                    "eventSlug": "sunset-clubinho-edition",
                    "name": "Maria Silva",
                    "guestCount": 5,
                    "notes": "Said \"hello\" to the DJ"
                })),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body.get("message"), Some(&json!("Inscricao realizada com sucesso.")));
        assert_eq!(body.pointer("/data/guestCount"), Some(&json!(2)));
        assert_eq!(body.pointer("/notification/sent"), Some(&json!(false)));

        let response = send(&app, request("GET", "/api/v1/event-signups", Some(ADMIN_KEY), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.pointer("/data/0/name"), Some(&json!("Maria Silva")));

        let response = send(
            &app,
            request(
                "GET",
                "/api/v1/event-signups?eventSlug=sunset-clubinho-edition&format=csv&adminKey=chave-admin",
                None,
                None,
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("text/csv; charset=utf-8")
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).and_then(|v| v.to_str().ok()),
            Some("attachment; filename=\"sunset-clubinho-edition-inscricoes.csv\"")
        );
        let csv = body_text(response).await;
        assert!(csv.starts_with("createdAt,eventSlug,eventTitle,name,email,phone,city,guestCount,notes\n"));
        assert!(csv.ends_with("\"Said \"\"hello\"\" to the DJ\""));
    }

    #[tokio::test]
    async fn unknown_event_is_404_with_error_body() {
        let app = test_app(None);
        let response = send(
            &app,
            request(
                "POST",
                "/api/v1/event-signups",
                None,
                Some(json!({"eventSlug": "nao-existe", "name": "Maria Silva"})),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body.pointer("/error/code"), Some(&json!(2001)));
        assert_eq!(body.pointer("/error/message"), Some(&json!("Evento nao encontrado.")));
    }

    #[tokio::test]
    async fn short_booking_name_is_400() {
        let app = test_app(None);
        let response = send(
            &app,
            request(
                "POST",
                "/api/v1/booking-requests",
                None,
                Some(json!({"name": "Al", "eventType": "Casamento"})),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body.pointer("/error/message"),
            Some(&json!("Informe um nome valido para contato."))
        );
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let app = test_app(None);
        let Ok(req) = Request::builder()
            .method("POST")
            .uri("/api/v1/booking-requests")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{nope"))
        else {
            panic!("request should build");
        };
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body.pointer("/error/code"), Some(&json!(1001)));
    }

    #[tokio::test]
    async fn admin_routes_fail_closed_without_secret() {
        let app = test_app(None);
        for (method, uri) in [
            ("GET", "/api/v1/event-signups"),
            ("GET", "/api/v1/booking-requests"),
            ("GET", "/api/v1/site-content"),
        ] {
            for key in [None, Some(""), Some("qualquer")] {
                let response = send(&app, request(method, uri, key, None)).await;
                assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
                let body = body_json(response).await;
                assert_eq!(body.pointer("/error/code"), Some(&json!(3002)));
            }
        }
    }

    #[tokio::test]
    async fn wrong_admin_key_is_401() {
        let app = test_app(Some(ADMIN_KEY));
        let response = send(&app, request("GET", "/api/v1/booking-requests", Some("errada"), None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let response = send(
            &app,
            request("PUT", "/api/v1/site-content", None, Some(json!({}))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn content_save_is_visible_on_public_events() {
        let app = test_app(Some(ADMIN_KEY));
        let response = send(&app, request("GET", "/api/v1/site-content", Some(ADMIN_KEY), None)).await;
        let body = body_json(response).await;
        assert_eq!(body.pointer("/data/updatedAt"), Some(&json!("seed")));

        let response = send(
            &app,
            request(
                "PUT",
                "/api/v1/site-content",
                Some(ADMIN_KEY),
                Some(json!({
                    "heroImages": [],
                    "events": [
                        {"slug": "nova-festa", "title": "Nova Festa", "dateIso": "2026-12-01", "dateLabel": "1 de dezembro"},
                        {"title": "Sem slug", "dateIso": "2026-12-02", "dateLabel": "2 de dezembro"}
                    ]
                })),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.get("message"), Some(&json!("Conteudo atualizado com sucesso.")));
        assert_ne!(body.pointer("/data/updatedAt"), Some(&json!("seed")));
        assert!(body.pointer("/data/heroImages/0/src").is_some());

        let response = send(&app, request("GET", "/api/v1/events", None, None)).await;
        let body = body_json(response).await;
        let Some(events) = body.get("data").and_then(Value::as_array) else {
            panic!("events must be a list");
        };
        assert_eq!(events.len(), 1);

        let response = send(&app, request("GET", "/api/v1/events/nova-festa", None, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = send(&app, request("GET", "/api/v1/events/sunset-clubinho-edition", None, None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn feed_serves_fallback_posts() {
        let app = test_app(None);
        let response = send(&app, request("GET", "/api/v1/feed?limit=2", None, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.pointer("/data/1/id"), Some(&json!("fallback-2")));
        assert!(body.pointer("/data/2").is_none());
    }

    #[tokio::test]
    async fn bad_query_string_uses_json_error_body() {
        let app = test_app(None);
        let response = send(&app, request("GET", "/api/v1/feed?limit=abc", None, None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        let body = body_json(response).await;
        assert_eq!(body.pointer("/error/code"), Some(&json!(1001)));
        assert!(body.pointer("/error/message").and_then(Value::as_str).is_some());
    }
}
