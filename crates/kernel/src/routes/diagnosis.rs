//! Diagnosis search routes.
//!
//! Substring search over diagnosis fields for samples and subjects. The
//! repositories return the full match set; pagination is applied here. These
//! endpoints accept arbitrary extra query parameters (no allowlist check) —
//! they deliberately exercise the query layer's lenient path.

use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::catalog::query::paginate;
use crate::catalog::{ListPage, Sample, Subject};
use crate::error::{ApiError, ApiResult};
use crate::pagination::PageParams;
use crate::routes::helpers::{list_response, query_pairs};
use crate::state::AppState;

/// Create the diagnosis search router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/sample-diagnosis", get(sample_diagnosis))
        .route("/api/v1/subject-diagnosis", get(subject_diagnosis))
}

fn search_term(pairs: &[(String, String)]) -> Result<String, ApiError> {
    pairs
        .iter()
        .find(|(k, _)| k == "search")
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::InvalidParameters {
            parameters: vec!["search".to_string()],
            reason: "Required for diagnosis search".to_string(),
        })
}

async fn sample_diagnosis(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Response> {
    let pairs = query_pairs(&uri);
    let params = PageParams::from_query(&pairs)?;
    let term = search_term(&pairs)?;

    let matches = state.catalog().samples().search_diagnosis(&term);
    let total = matches.len();
    let data: Vec<Sample> = paginate(&matches, params.page, params.per_page)
        .iter()
        .map(|s| (*s).clone())
        .collect();

    Ok(list_response(
        &headers,
        &uri,
        &pairs,
        params,
        ListPage { data, total },
    ))
}

async fn subject_diagnosis(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Response> {
    let pairs = query_pairs(&uri);
    let params = PageParams::from_query(&pairs)?;
    let term = search_term(&pairs)?;

    let matches = state.catalog().subjects().search_diagnosis(&term);
    let total = matches.len();
    let data: Vec<Subject> = paginate(&matches, params.page, params.per_page)
        .iter()
        .map(|s| (*s).clone())
        .collect();

    Ok(list_response(
        &headers,
        &uri,
        &pairs,
        params,
        ListPage { data, total },
    ))
}
