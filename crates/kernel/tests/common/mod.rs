#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)]
//! Common test utilities for integration tests.
//!
//! Drives the REAL application router — routes, rate limiting, and the JSON
//! 404 fallback — through tower's `oneshot`, with no network listener and no
//! Redis (the cache degrades to pass-through and the rate limiter fails
//! open). Each [`TestApp`] gets its own state, so tests are fully isolated.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use datafed_kernel::catalog::Catalog;
use datafed_kernel::config::Config;
use datafed_kernel::routes;
use datafed_kernel::state::AppState;

/// Configuration that needs no environment: no Redis, generous rate limits.
pub fn test_config() -> Config {
    Config {
        port: 0,
        redis_url: None,
        cache_ttl_secs: 120,
        rate_limit_max: 10_000,
        rate_limit_window_secs: 60,
        cors_allowed_origins: vec!["*".to_string()],
        environment: "test".to_string(),
    }
}

/// A parsed response: status, optional Link header, JSON body.
pub struct TestResponse {
    pub status: StatusCode,
    pub link: Option<String>,
    pub body: Value,
}

impl TestResponse {
    /// First entry of the error envelope.
    pub fn error(&self) -> &Value {
        &self.body["errors"][0]
    }
}

/// Test application wrapper over the real router.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// App backed by the seed catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    /// App backed by an explicit catalog fixture.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let state =
            AppState::with_catalog(&test_config(), catalog).expect("failed to build AppState");
        Self {
            router: routes::router(state),
        }
    }

    /// Issue a GET request and parse the response.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let link = response
            .headers()
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is not valid JSON")
        };

        TestResponse { status, link, body }
    }
}
