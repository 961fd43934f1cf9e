//! Metadata field-discovery routes.
//!
//! Exposes the countable-field allowlists per entity so clients can build
//! dynamic filtering and aggregation UIs.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::catalog::{FILE_COUNT_FIELDS, SAMPLE_COUNT_FIELDS, SUBJECT_COUNT_FIELDS};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct FieldsResponse {
    fields: Vec<&'static str>,
}

/// Create the metadata router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/metadata/fields/subject", get(subject_fields))
        .route("/api/v1/metadata/fields/sample", get(sample_fields))
        .route("/api/v1/metadata/fields/file", get(file_fields))
}

async fn subject_fields() -> Json<FieldsResponse> {
    Json(FieldsResponse {
        fields: SUBJECT_COUNT_FIELDS.to_vec(),
    })
}

async fn sample_fields() -> Json<FieldsResponse> {
    Json(FieldsResponse {
        fields: SAMPLE_COUNT_FIELDS.to_vec(),
    })
}

async fn file_fields() -> Json<FieldsResponse> {
    Json(FieldsResponse {
        fields: FILE_COUNT_FIELDS.to_vec(),
    })
}
