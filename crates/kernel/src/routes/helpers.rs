//! Shared route helpers.
//!
//! List endpoints all follow the same boundary discipline: decode the raw
//! query string (repeated parameters preserved), validate pagination,
//! reject unknown keys, then hand a lenient filter set to the repository.
//! The strict rejection lives here on purpose — the query engine below is
//! permissive, and internal callers rely on that.

use axum::Json;
use axum::http::{HeaderMap, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::catalog::{FilterParam, FilterSet, ListPage, ValueCount};
use crate::error::ApiError;
use crate::pagination::{PageParams, Pagination, build_link_header};

/// Envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Envelope for count endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountsResponse {
    pub field: String,
    pub counts: Vec<ValueCount>,
}

/// Decode the request's query string into ordered key/value pairs.
pub fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    uri.query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Reconstruct the request URL up to the query string.
///
/// Scheme comes from `X-Forwarded-Proto` when a proxy supplies it.
pub fn request_base_url(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{scheme}://{host}{}", uri.path())
}

/// Reject query keys outside `page`/`per_page` and the entity's filter
/// allowlist, so client typos fail loudly instead of silently widening the
/// result set.
pub fn reject_unknown_params(
    pairs: &[(String, String)],
    allowlist: &[&str],
) -> Result<(), ApiError> {
    let mut unknown: Vec<String> = Vec::new();
    for (key, _) in pairs {
        if key == "page" || key == "per_page" || allowlist.contains(&key.as_str()) {
            continue;
        }
        if !unknown.contains(key) {
            unknown.push(key.clone());
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ApiError::InvalidParameters {
            parameters: unknown,
            reason: "Unsupported filter parameters".to_string(),
        })
    }
}

/// Group query pairs into a filter set, pagination keys excluded.
///
/// A key given once is a scalar filter; repeated keys become an inclusion
/// test.
pub fn collect_filters(pairs: &[(String, String)]) -> FilterSet {
    let mut filters = FilterSet::new();
    for (key, value) in pairs {
        if key == "page" || key == "per_page" {
            continue;
        }
        match filters.get_mut(key) {
            None => {
                filters.insert(key.clone(), FilterParam::Scalar(value.clone()));
            }
            Some(FilterParam::Scalar(first)) => {
                let first = std::mem::take(first);
                filters.insert(key.clone(), FilterParam::Many(vec![first, value.clone()]));
            }
            Some(FilterParam::Many(all)) => all.push(value.clone()),
        }
    }
    filters
}

/// Build the standard list response: data + pagination envelope plus the
/// RFC 5988 `Link` header.
pub fn list_response<T: Serialize>(
    headers: &HeaderMap,
    uri: &Uri,
    pairs: &[(String, String)],
    params: PageParams,
    page: ListPage<T>,
) -> Response {
    let link = build_link_header(
        &request_base_url(headers, uri),
        pairs,
        params.page,
        params.per_page,
        page.total,
    );
    let body = ListResponse {
        data: page.data,
        pagination: Pagination {
            page: params.page,
            per_page: params.per_page,
            total: page.total,
        },
    };
    ([(header::LINK, link)], Json(body)).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn query_pairs_decodes_repeats_in_order() {
        let uri: Uri = "/api/v1/sample?a=1&b=2&a=3".parse().unwrap();
        assert_eq!(
            query_pairs(&uri),
            pairs(&[("a", "1"), ("b", "2"), ("a", "3")])
        );
        let bare: Uri = "/api/v1/sample".parse().unwrap();
        assert!(query_pairs(&bare).is_empty());
    }

    #[test]
    fn collect_filters_groups_repeated_keys() {
        let filters = collect_filters(&pairs(&[
            ("tissue_type", "Tumor"),
            ("tissue_type", "Normal"),
            ("page", "2"),
            ("diagnosis", "Leukemia"),
        ]));
        assert_eq!(filters.len(), 2);
        assert_eq!(
            filters.get("tissue_type"),
            Some(&FilterParam::Many(vec![
                "Tumor".to_string(),
                "Normal".to_string()
            ]))
        );
        assert_eq!(
            filters.get("diagnosis"),
            Some(&FilterParam::Scalar("Leukemia".to_string()))
        );
    }

    #[test]
    fn unknown_params_are_listed_once_each() {
        let err = reject_unknown_params(
            &pairs(&[("bogus", "1"), ("bogus", "2"), ("other", "3"), ("sex", "M")]),
            &["sex"],
        )
        .unwrap_err();
        let ApiError::InvalidParameters { parameters, .. } = err else {
            panic!("expected InvalidParameters");
        };
        assert_eq!(parameters, vec!["bogus", "other"]);
    }

    #[test]
    fn pagination_keys_are_never_unknown() {
        assert!(reject_unknown_params(&pairs(&[("page", "1"), ("per_page", "5")]), &[]).is_ok());
    }

    #[test]
    fn base_url_uses_forwarded_proto_and_host() {
        let uri: Uri = "/api/v1/sample?page=1".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "api.example.org".parse().unwrap());
        headers.insert("x-forwarded-proto", "https".parse().unwrap());
        assert_eq!(
            request_base_url(&headers, &uri),
            "https://api.example.org/api/v1/sample"
        );

        let headers = HeaderMap::new();
        assert_eq!(
            request_base_url(&headers, &uri),
            "http://localhost/api/v1/sample"
        );
    }
}
