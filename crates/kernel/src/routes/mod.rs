//! HTTP route handlers.

pub mod diagnosis;
pub mod file;
pub mod health;
pub mod helpers;
pub mod info;
pub mod metadata;
pub mod namespace;
pub mod organization;
pub mod sample;
pub mod subject;

use axum::Router;
use axum::http::Uri;

use crate::error::ApiError;
use crate::state::AppState;

/// Assemble the full application router.
///
/// Both the `datafed` binary and the integration tests build the router
/// through this function, so tests exercise the real wiring (routes, rate
/// limiting, fallback).
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(info::router())
        .merge(health::router())
        .merge(subject::router())
        .merge(sample::router())
        .merge(file::router())
        .merge(namespace::router())
        .merge(organization::router())
        .merge(metadata::router())
        .merge(diagnosis::router())
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::throttle,
        ))
        .with_state(state)
}

/// JSON 404 for unknown routes, in the standard error envelope.
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        entity: "Route",
        id: uri.path().to_string(),
    }
}
