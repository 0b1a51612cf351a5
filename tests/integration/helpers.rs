//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use sharehub_api::{AppState, build_app};
use sharehub_core::config::AppConfig;
use sharehub_service::{IdCodec, IdKind};
use sharehub_store::{SeedData, collaborators_from_seed};

/// User agent of a link-unfurl crawler.
pub const CRAWLER_UA: &str = "Mozilla/5.0 (compatible; Discordbot/2.0; +https://discordapp.com)";

/// User agent of a regular browser.
pub const BROWSER_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0";

/// Seed data shared by the integration tests.
///
/// 1: public file share of alice. 2: password-protected folder share of
/// alice. 3: expired file share of bob (empty nickname).
pub const SEED: &str = r#"{
    "users": [
        { "id": 1, "nickname": "alice", "email": "alice@example.com" },
        { "id": 2, "nickname": "", "email": "bob@example.com" }
    ],
    "shares": [
        {
            "id": 1,
            "owner_id": 1,
            "created_at": "2026-01-01T00:00:00Z",
            "is_public": true,
            "root": { "id": 10, "kind": "file", "name": "report.pdf", "size": 1572864 }
        },
        {
            "id": 2,
            "owner_id": 1,
            "password": "letmein",
            "created_at": "2026-02-01T00:00:00Z",
            "root": {
                "id": 20,
                "kind": "folder",
                "name": "Photos",
                "children": [
                    { "id": 21, "kind": "file", "name": "beach.jpg", "size": 2048 },
                    { "id": 22, "kind": "folder", "name": "2025" }
                ]
            }
        },
        {
            "id": 3,
            "owner_id": 2,
            "created_at": "2020-03-01T00:00:00Z",
            "expires_at": "2020-03-02T00:00:00Z",
            "root": { "id": 30, "kind": "file", "name": "old.zip", "size": 10 }
        }
    ]
}"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Id codec used by the app
    pub ids: Arc<dyn IdCodec>,
}

/// Response of a test request
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("JSON body")
    }

    /// A header value as text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Configuration used by the integration tests.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.site.url = "https://files.example.com".to_string();
    config.site.large_icon = "/static/icon-512.png".to_string();
    config.store.id_salt = "integration".to_string();
    config.preview.lookup_timeout_ms = 1000;
    config
}

impl TestApp {
    /// Create a new test application with the default test configuration
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a new test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let seed = SeedData::from_json(SEED).expect("seed");
        let collaborators = collaborators_from_seed(&config, seed).expect("collaborators");
        let ids = collaborators.ids.clone();
        let router = build_app(AppState::new(config.clone(), collaborators));
        Self {
            router,
            config,
            ids,
        }
    }

    /// Public id of a seeded share
    pub fn share_id(&self, id: i64) -> String {
        self.ids.encode(id, IdKind::Share)
    }

    /// Public id of a seeded user
    pub fn user_id(&self, id: i64) -> String {
        self.ids.encode(id, IdKind::User)
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str, user_agent: &str) -> TestResponse {
        self.get_as(uri, user_agent, None).await
    }

    /// Send a GET request, optionally as an authenticated user
    pub async fn get_as(&self, uri: &str, user_agent: &str, viewer: Option<i64>) -> TestResponse {
        let mut builder = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::USER_AGENT, user_agent);
        if let Some(viewer) = viewer {
            builder = builder.header(
                self.config.server.viewer_header.as_str(),
                viewer.to_string(),
            );
        }
        let request = builder.body(Body::empty()).expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
