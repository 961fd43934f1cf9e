//! Sample API routes.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Uri};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::{SAMPLE_COUNT_FIELDS, SAMPLE_FILTER_FIELDS, Sample, SampleSummary};
use crate::error::{ApiError, ApiResult};
use crate::pagination::PageParams;
use crate::routes::helpers::{
    CountsResponse, collect_filters, list_response, query_pairs, reject_unknown_params,
};
use crate::state::AppState;

/// Create the sample router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/sample", get(list_samples))
        .route("/api/v1/sample/summary", get(sample_summary))
        .route("/api/v1/sample/by/{field}/count", get(sample_counts))
        .route(
            "/api/v1/sample/{organization}/{namespace}/{name}",
            get(get_sample),
        )
}

async fn list_samples(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Response> {
    let pairs = query_pairs(&uri);
    let params = PageParams::from_query(&pairs)?;
    reject_unknown_params(&pairs, SAMPLE_FILTER_FIELDS)?;

    let filters = collect_filters(&pairs);
    let page = state
        .catalog()
        .samples()
        .list(&filters, params.page, params.per_page);

    Ok(list_response(&headers, &uri, &pairs, params, page))
}

async fn get_sample(
    State(state): State<AppState>,
    Path((organization, namespace, name)): Path<(String, String, String)>,
) -> ApiResult<Json<Sample>> {
    state
        .catalog()
        .samples()
        .get(&organization, &namespace, &name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound {
            entity: "Sample",
            id: format!("{organization}/{namespace}/{name}"),
        })
}

async fn sample_counts(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> ApiResult<Json<CountsResponse>> {
    let Some(counts) = state.catalog().samples().counts_by(&field) else {
        return Err(ApiError::UnsupportedField {
            field,
            supported: SAMPLE_COUNT_FIELDS.to_vec(),
        });
    };

    let key = format!("sample:count:{field}");
    let counts = state
        .cache()
        .get_or_compute(&key, state.cache_ttl_secs(), || counts)
        .await;

    Ok(Json(CountsResponse { field, counts }))
}

async fn sample_summary(State(state): State<AppState>) -> Json<SampleSummary> {
    let summary = state
        .cache()
        .get_or_compute("sample:summary", state.cache_ttl_secs(), || {
            state.catalog().samples().summary()
        })
        .await;
    Json(summary)
}
