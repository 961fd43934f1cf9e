//! API error taxonomy.
//!
//! Every client-visible failure is one of four kinds, rendered in a uniform
//! envelope `{ "errors": [ { "kind", "message", ... } ] }` with kind-specific
//! metadata attached so clients can act on the failure (e.g. show the
//! supported field set).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Domain errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Aggregation requested on a field outside the entity's count allowlist.
    #[error("Unsupported field: {field}")]
    UnsupportedField {
        field: String,
        supported: Vec<&'static str>,
    },

    /// Pagination out of range or unknown query parameters present.
    #[error("Invalid parameters: {}", parameters.join(", "))]
    InvalidParameters {
        parameters: Vec<String>,
        reason: String,
    },

    /// Composite-key lookup miss.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Stable kind discriminator included in the error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::UnsupportedField { .. } => "UnsupportedField",
            ApiError::InvalidParameters { .. } => "InvalidParameters",
            ApiError::NotFound { .. } => "NotFound",
            ApiError::Internal(_) => "InternalServerError",
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedField { .. } | ApiError::InvalidParameters { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut entry = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });

        match &self {
            ApiError::UnsupportedField { field, supported } => {
                entry["field"] = json!(field);
                entry["supported"] = json!(supported);
            }
            ApiError::InvalidParameters { parameters, reason } => {
                entry["parameters"] = json!(parameters);
                entry["reason"] = json!(reason);
            }
            ApiError::NotFound { entity, id } => {
                entry["entity"] = json!(entity);
                entry["id"] = json!(id);
            }
            ApiError::Internal(e) => {
                // Log the details, never leak them to the client
                tracing::error!(error = %e, "internal server error");
                entry["message"] = json!("Internal server error");
            }
        }

        (self.status(), Json(json!({ "errors": [entry] }))).into_response()
    }
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
