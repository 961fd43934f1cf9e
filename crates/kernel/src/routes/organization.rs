//! Organization API routes.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::Organization;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Create the organization router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/organization", get(list_organizations))
        .route("/api/v1/organization/{name}", get(get_organization))
}

async fn list_organizations(State(state): State<AppState>) -> Json<Vec<Organization>> {
    Json(state.catalog().organizations().all().to_vec())
}

async fn get_organization(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Organization>> {
    state
        .catalog()
        .organizations()
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound {
            entity: "Organization",
            id: name,
        })
}
