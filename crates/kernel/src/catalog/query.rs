//! Filtering, pagination, and frequency aggregation over in-memory
//! collections.
//!
//! These are deliberately minimal linear scans; the catalog is small seed
//! data and a persistent backend would push the same semantics down into its
//! query language. The semantics that must survive any backend swap:
//!
//! - filters outside the allowlist are always-satisfied (strict rejection of
//!   unknown keys belongs to the HTTP boundary, not here — internal callers
//!   rely on the leniency);
//! - scalar matching is string-coerced equality, conjunctive across keys;
//! - aggregation flattens list-valued fields and preserves first-seen bucket
//!   order.

use serde_json::Value;

use super::types::{FieldValue, FilterParam, FilterSet, Queryable, ValueCount};

/// Keep only items satisfying every filter whose key is in the allowlist.
///
/// An empty filter set is the identity. Keys outside the allowlist are
/// ignored. A record lacking an allowlisted field never matches a filter on
/// that field.
pub fn apply_filters<'a, T: Queryable>(
    items: &'a [T],
    filters: &FilterSet,
    allowlist: &[&str],
) -> Vec<&'a T> {
    if filters.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            filters.iter().all(|(key, param)| {
                if !allowlist.contains(&key.as_str()) {
                    return true;
                }
                let Some(value) = item.field(key) else {
                    return false;
                };
                let rendered = value.render();
                match param {
                    FilterParam::Scalar(want) => rendered == *want,
                    FilterParam::Many(wanted) => wanted.iter().any(|w| *w == rendered),
                }
            })
        })
        .collect()
}

/// Extract the 1-indexed page window `[offset, offset + per_page)`, clipped
/// to the collection bounds.
///
/// Pure slicing: callers must capture `items.len()` as the total before
/// paginating.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let offset = page.saturating_sub(1).saturating_mul(per_page);
    if offset >= items.len() {
        return &[];
    }
    let end = offset.saturating_add(per_page).min(items.len());
    &items[offset..end]
}

/// Frequency counts of a field's values, in first-seen order.
///
/// Missing, null, and empty-string values contribute nothing. List-valued
/// fields are flattened: each element is counted individually, and empty
/// elements are skipped.
pub fn group_counts<T: Queryable>(items: &[T], field: &str) -> Vec<ValueCount> {
    let mut counts: Vec<ValueCount> = Vec::new();

    for item in items {
        match item.field(field) {
            None => {}
            Some(FieldValue::Text(s)) => {
                if !s.is_empty() {
                    bump(&mut counts, Value::String(s));
                }
            }
            Some(FieldValue::Int(n)) => bump(&mut counts, Value::from(n)),
            Some(FieldValue::List(values)) => {
                for v in values {
                    if !v.is_empty() {
                        bump(&mut counts, Value::String(v));
                    }
                }
            }
        }
    }

    counts
}

fn bump(counts: &mut Vec<ValueCount>, value: Value) {
    if let Some(entry) = counts.iter_mut().find(|c| c.value == value) {
        entry.count += 1;
    } else {
        counts.push(ValueCount { value, count: 1 });
    }
}
