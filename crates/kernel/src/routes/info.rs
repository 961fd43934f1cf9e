//! Service banner and info routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
    health: &'static str,
}

#[derive(Debug, Serialize)]
struct InfoResponse {
    server: ServerInfo,
    data: DataInfo,
}

#[derive(Debug, Serialize)]
struct ServerInfo {
    version: &'static str,
    time: String,
    environment: String,
}

#[derive(Debug, Serialize)]
struct DataInfo {
    version: &'static str,
    about: &'static str,
}

/// Create the info router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/v1/info", get(info))
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Data Federation REST API",
        version: env!("CARGO_PKG_VERSION"),
        health: "/health",
    })
}

/// Consolidated snapshot of server and data-layer metadata.
async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        server: ServerInfo {
            version: env!("CARGO_PKG_VERSION"),
            time: chrono::Utc::now().to_rfc3339(),
            environment: state.environment().to_string(),
        },
        data: DataInfo {
            version: "seed-1.0.0",
            about: "In-memory seed catalog",
        },
    })
}
