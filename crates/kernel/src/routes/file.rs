//! File API routes.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Uri};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::{FILE_COUNT_FIELDS, FILE_FILTER_FIELDS, File, FileSummary};
use crate::error::{ApiError, ApiResult};
use crate::pagination::PageParams;
use crate::routes::helpers::{
    CountsResponse, collect_filters, list_response, query_pairs, reject_unknown_params,
};
use crate::state::AppState;

/// Create the file router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/file", get(list_files))
        .route("/api/v1/file/summary", get(file_summary))
        .route("/api/v1/file/by/{field}/count", get(file_counts))
        .route(
            "/api/v1/file/{organization}/{namespace}/{name}",
            get(get_file),
        )
}

async fn list_files(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Response> {
    let pairs = query_pairs(&uri);
    let params = PageParams::from_query(&pairs)?;
    reject_unknown_params(&pairs, FILE_FILTER_FIELDS)?;

    let filters = collect_filters(&pairs);
    let page = state
        .catalog()
        .files()
        .list(&filters, params.page, params.per_page);

    Ok(list_response(&headers, &uri, &pairs, params, page))
}

async fn get_file(
    State(state): State<AppState>,
    Path((organization, namespace, name)): Path<(String, String, String)>,
) -> ApiResult<Json<File>> {
    state
        .catalog()
        .files()
        .get(&organization, &namespace, &name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound {
            entity: "File",
            id: format!("{organization}/{namespace}/{name}"),
        })
}

async fn file_counts(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> ApiResult<Json<CountsResponse>> {
    let Some(counts) = state.catalog().files().counts_by(&field) else {
        return Err(ApiError::UnsupportedField {
            field,
            supported: FILE_COUNT_FIELDS.to_vec(),
        });
    };

    let key = format!("file:count:{field}");
    let counts = state
        .cache()
        .get_or_compute(&key, state.cache_ttl_secs(), || counts)
        .await;

    Ok(Json(CountsResponse { field, counts }))
}

async fn file_summary(State(state): State<AppState>) -> Json<FileSummary> {
    let summary = state
        .cache()
        .get_or_compute("file:summary", state.cache_ttl_secs(), || {
            state.catalog().files().summary()
        })
        .await;
    Json(summary)
}
