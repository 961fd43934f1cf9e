//! Health check endpoints.
//!
//! `/health` reports overall status plus per-dependency detail. Redis is an
//! optional dependency, so its state is reported but never flips the overall
//! status — the catalog itself is in-process and always available.
//! `/health/liveness` and `/health/readiness` are plain probes for
//! orchestrators.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    version: &'static str,
    services: Services,
    environment: String,
}

#[derive(Debug, Serialize)]
struct Services {
    redis: ServiceStatus,
}

#[derive(Debug, Serialize)]
struct ServiceStatus {
    status: &'static str,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct ProbeResponse {
    status: &'static str,
    timestamp: String,
}

/// Create the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let timestamp = chrono::Utc::now().to_rfc3339();
    let redis = state.cache().probe().await;

    Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp.clone(),
        version: env!("CARGO_PKG_VERSION"),
        services: Services {
            redis: ServiceStatus {
                status: redis.as_str(),
                timestamp,
            },
        },
        environment: state.environment().to_string(),
    })
}

async fn liveness() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "alive",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn readiness() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "ready",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
