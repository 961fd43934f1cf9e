//! Namespace API routes.
//!
//! Read-only endpoints exposing registered namespaces and lookups.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::Namespace;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Create the namespace router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/namespace", get(list_namespaces))
        .route(
            "/api/v1/namespace/{organization}/{namespace}",
            get(get_namespace),
        )
}

async fn list_namespaces(State(state): State<AppState>) -> Json<Vec<Namespace>> {
    Json(state.catalog().namespaces().all().to_vec())
}

async fn get_namespace(
    State(state): State<AppState>,
    Path((organization, namespace)): Path<(String, String)>,
) -> ApiResult<Json<Namespace>> {
    state
        .catalog()
        .namespaces()
        .get(&organization, &namespace)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound {
            entity: "Namespace",
            id: format!("{organization}/{namespace}"),
        })
}
