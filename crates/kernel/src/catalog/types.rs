//! Shared query-layer types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record field value as seen by the query layer.
///
/// Entities expose their filterable/countable fields through [`Queryable`]
/// rather than reflection; this keeps the engine generic while the records
/// stay plain typed structs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    /// Multi-valued field (e.g. anatomical_sites, depositions).
    List(Vec<String>),
}

impl FieldValue {
    /// String rendering used for filter equality.
    ///
    /// Lists join with commas, so a single-element list compares equal to
    /// its element.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Int(n) => n.to_string(),
            FieldValue::List(items) => items.join(","),
        }
    }
}

/// Field access by name for filtering and aggregation.
///
/// Returning `None` means the record has no such field; an allowlisted
/// filter on a missing field matches nothing, and aggregation skips it.
pub trait Queryable {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// A filter value decoded from the query string.
///
/// A parameter given once is a scalar; repeated parameters become an
/// inclusion test over all supplied values.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterParam {
    Scalar(String),
    Many(Vec<String>),
}

/// Filter set keyed by field name.
pub type FilterSet = HashMap<String, FilterParam>;

/// One aggregation bucket: a distinct field value and its frequency.
///
/// Bucket keys stay typed (a numeric field yields JSON numbers); they are
/// not string-coerced the way filter equality is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: Value,
    pub count: u64,
}

/// One page of a filtered listing.
///
/// `total` is the filtered count before pagination, never the page length.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub data: Vec<T>,
    pub total: usize,
}
