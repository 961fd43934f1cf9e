//! Subject API routes.
//!
//! Listing with filtering and pagination, composite-key lookup, grouped
//! counts, and summary aggregates. Handlers stay thin: parameter validation
//! and error mapping here, query logic in the repository.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Uri};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::{SUBJECT_COUNT_FIELDS, SUBJECT_FILTER_FIELDS, Subject, SubjectSummary};
use crate::error::{ApiError, ApiResult};
use crate::pagination::PageParams;
use crate::routes::helpers::{
    CountsResponse, collect_filters, list_response, query_pairs, reject_unknown_params,
};
use crate::state::AppState;

/// Create the subject router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/subject", get(list_subjects))
        .route("/api/v1/subject/summary", get(subject_summary))
        .route("/api/v1/subject/by/{field}/count", get(subject_counts))
        .route(
            "/api/v1/subject/{organization}/{namespace}/{name}",
            get(get_subject),
        )
}

async fn list_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Response> {
    let pairs = query_pairs(&uri);
    let params = PageParams::from_query(&pairs)?;
    reject_unknown_params(&pairs, SUBJECT_FILTER_FIELDS)?;

    let filters = collect_filters(&pairs);
    let page = state
        .catalog()
        .subjects()
        .list(&filters, params.page, params.per_page);

    Ok(list_response(&headers, &uri, &pairs, params, page))
}

async fn get_subject(
    State(state): State<AppState>,
    Path((organization, namespace, name)): Path<(String, String, String)>,
) -> ApiResult<Json<Subject>> {
    state
        .catalog()
        .subjects()
        .get(&organization, &namespace, &name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound {
            entity: "Subject",
            id: format!("{organization}/{namespace}/{name}"),
        })
}

async fn subject_counts(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> ApiResult<Json<CountsResponse>> {
    let Some(counts) = state.catalog().subjects().counts_by(&field) else {
        return Err(ApiError::UnsupportedField {
            field,
            supported: SUBJECT_COUNT_FIELDS.to_vec(),
        });
    };

    let key = format!("subject:count:{field}");
    let counts = state
        .cache()
        .get_or_compute(&key, state.cache_ttl_secs(), || counts)
        .await;

    Ok(Json(CountsResponse { field, counts }))
}

async fn subject_summary(State(state): State<AppState>) -> Json<SubjectSummary> {
    let summary = state
        .cache()
        .get_or_compute("subject:summary", state.cache_ttl_secs(), || {
            state.catalog().subjects().summary()
        })
        .await;
    Json(summary)
}
