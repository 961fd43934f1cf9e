//! Pagination parameters and RFC 5988 Link header construction.
//!
//! Every list endpoint shares the same pagination contract: `page` >= 1
//! (default 1) and `per_page` in 1..=1000 (default 100), enforced here at
//! the boundary — the query layer itself never validates. Link headers
//! preserve the caller's non-pagination parameters so clients can follow
//! links without re-specifying filters.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::ApiError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 100;
pub const MAX_PER_PAGE: usize = 1000;

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: usize,
    pub per_page: usize,
}

impl PageParams {
    /// Extract and validate `page`/`per_page` from decoded query pairs,
    /// applying defaults for absent parameters.
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, ApiError> {
        let mut page = DEFAULT_PAGE;
        let mut per_page = DEFAULT_PER_PAGE;
        let mut offending = Vec::new();

        if let Some((_, raw)) = pairs.iter().find(|(k, _)| k == "page") {
            match raw.parse::<usize>() {
                Ok(v) if v >= 1 => page = v,
                _ => offending.push("page".to_string()),
            }
        }

        if let Some((_, raw)) = pairs.iter().find(|(k, _)| k == "per_page") {
            match raw.parse::<usize>() {
                Ok(v) if (1..=MAX_PER_PAGE).contains(&v) => per_page = v,
                _ => offending.push("per_page".to_string()),
            }
        }

        if !offending.is_empty() {
            return Err(ApiError::InvalidParameters {
                parameters: offending,
                reason: format!(
                    "page must be a positive integer and per_page between 1 and {MAX_PER_PAGE}"
                ),
            });
        }

        Ok(Self { page, per_page })
    }
}

/// Pagination block of a list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

/// Build an RFC 5988 `Link` header value.
///
/// `base` is the request URL up to (not including) the query string; `pairs`
/// are the request's decoded query pairs. `first` and `last` are always
/// emitted, `prev`/`next` only where they exist, in that fixed order. All
/// original parameters except `page`/`per_page` are carried into each link,
/// repeated parameters included; `page`/`per_page` are overwritten with the
/// target window.
pub fn build_link_header(
    base: &str,
    pairs: &[(String, String)],
    page: usize,
    per_page: usize,
    total: usize,
) -> String {
    let total_pages = std::cmp::max(1, total.div_ceil(per_page));

    let link = |target_page: usize| {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (k, v) in pairs {
            if k == "page" || k == "per_page" {
                continue;
            }
            query.append_pair(k, v);
        }
        query.append_pair("page", &target_page.to_string());
        query.append_pair("per_page", &per_page.to_string());
        format!("{base}?{}", query.finish())
    };

    let mut rels = vec![
        format!("<{}>; rel=\"first\"", link(1)),
        format!("<{}>; rel=\"last\"", link(total_pages)),
    ];
    if page > 1 {
        rels.push(format!("<{}>; rel=\"prev\"", link(page - 1)));
    }
    if page < total_pages {
        rels.push(format!("<{}>; rel=\"next\"", link(page + 1)));
    }

    rels.join(", ")
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
    fn page_params_defaults() {
        let params = PageParams::from_query(&[]).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 100);
    }

    #[test]
    fn page_params_parses_values() {
        let params = PageParams::from_query(&pairs(&[("page", "3"), ("per_page", "25")])).unwrap();
        assert_eq!(params.page, 3);
        assert_eq!(params.per_page, 25);
    }

    #[test]
    fn page_params_rejects_zero_page() {
        let err = PageParams::from_query(&pairs(&[("page", "0")])).unwrap_err();
        let ApiError::InvalidParameters { parameters, .. } = err else {
            panic!("expected InvalidParameters");
        };
        assert_eq!(parameters, vec!["page"]);
    }

    #[test]
    fn page_params_rejects_oversized_per_page() {
        let err = PageParams::from_query(&pairs(&[("per_page", "1001")])).unwrap_err();
        let ApiError::InvalidParameters { parameters, .. } = err else {
            panic!("expected InvalidParameters");
        };
        assert_eq!(parameters, vec!["per_page"]);
    }

    #[test]
    fn page_params_rejects_garbage() {
        assert!(PageParams::from_query(&pairs(&[("page", "abc")])).is_err());
        assert!(PageParams::from_query(&pairs(&[("per_page", "-1")])).is_err());
    }

    #[test]
    fn link_header_middle_page_has_all_relations() {
        let header = build_link_header("http://localhost/api/v1/sample", &[], 2, 1, 3);
        assert!(header.contains("page=1&per_page=1>; rel=\"first\""));
        assert!(header.contains("page=3&per_page=1>; rel=\"last\""));
        assert!(header.contains("page=1&per_page=1>; rel=\"prev\""));
        assert!(header.contains("page=3&per_page=1>; rel=\"next\""));
    }

    #[test]
    fn link_header_first_page_omits_prev() {
        let header = build_link_header("http://localhost/x", &[], 1, 1, 3);
        assert!(!header.contains("rel=\"prev\""));
        assert!(header.contains("rel=\"next\""));
    }

    #[test]
    fn link_header_last_page_omits_next() {
        let header = build_link_header("http://localhost/x", &[], 3, 1, 3);
        assert!(header.contains("rel=\"prev\""));
        assert!(!header.contains("rel=\"next\""));
    }

    #[test]
    fn link_header_empty_collection_still_links_page_one() {
        let header = build_link_header("http://localhost/x", &[], 1, 100, 0);
        assert!(header.contains("page=1&per_page=100>; rel=\"first\""));
        assert!(header.contains("page=1&per_page=100>; rel=\"last\""));
        assert!(!header.contains("rel=\"prev\""));
        assert!(!header.contains("rel=\"next\""));
    }

    #[test]
    fn link_header_preserves_filter_params() {
        let header = build_link_header(
            "http://localhost/api/v1/sample",
            &pairs(&[("tissue_type", "Tumor"), ("page", "1"), ("per_page", "1")]),
            1,
            1,
            2,
        );
        assert!(header.contains("tissue_type=Tumor&page=2&per_page=1>; rel=\"next\""));
        // The original page/per_page pair is dropped, not duplicated.
        assert!(!header.contains("page=1&page="));
    }

    #[test]
    fn link_header_preserves_repeated_params() {
        let header = build_link_header(
            "http://localhost/x",
            &pairs(&[("site", "Liver"), ("site", "Bone")]),
            1,
            10,
            20,
        );
        assert!(header.contains("site=Liver&site=Bone&page=2&per_page=10>; rel=\"next\""));
    }

    #[test]
    fn link_header_rel_order_is_fixed() {
        let header = build_link_header("http://h/x", &[], 2, 1, 3);
        let first = header.find("rel=\"first\"").unwrap();
        let last = header.find("rel=\"last\"").unwrap();
        let prev = header.find("rel=\"prev\"").unwrap();
        let next = header.find("rel=\"next\"").unwrap();
        assert!(first < last && last < prev && prev < next);
    }
}
