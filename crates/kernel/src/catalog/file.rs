//! File records and repository.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query::{apply_filters, group_counts, paginate};
use super::types::{FieldValue, FilterSet, ListPage, Queryable, ValueCount};

/// Query keys accepted when filtering file listings.
pub const FILE_FILTER_FIELDS: &[&str] = &["type", "size", "description", "checksums", "depositions"];

/// Fields files can be counted by.
pub const FILE_COUNT_FIELDS: &[&str] = &["type"];

/// A data file, keyed by `(organization, namespace, name)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub organization: String,
    pub namespace: String,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: i64,
    pub description: String,
    pub checksums: BTreeMap<String, String>,
    pub depositions: Vec<String>,
    pub metadata: Value,
}

impl Queryable for File {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "type" => Some(FieldValue::Text(self.file_type.clone())),
            "size" => Some(FieldValue::Int(self.size)),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "depositions" => Some(FieldValue::List(self.depositions.clone())),
            // checksums is a map; it has no scalar rendering, so filters on
            // it match nothing.
            _ => None,
        }
    }
}

/// Fixed aggregate returned by the file summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub total: usize,
    pub by_type: Vec<ValueCount>,
}

/// Read-only access to the file collection.
#[derive(Debug, Clone)]
pub struct FileRepository {
    records: Vec<File>,
}

impl FileRepository {
    pub fn new(records: Vec<File>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[File] {
        &self.records
    }

    /// Filtered, paginated listing. `total` is the filtered count.
    pub fn list(&self, filters: &FilterSet, page: usize, per_page: usize) -> ListPage<File> {
        let filtered = apply_filters(&self.records, filters, FILE_FILTER_FIELDS);
        let total = filtered.len();
        let data = paginate(&filtered, page, per_page)
            .iter()
            .map(|f| (*f).clone())
            .collect();
        ListPage { data, total }
    }

    /// Composite-key lookup.
    pub fn get(&self, organization: &str, namespace: &str, name: &str) -> Option<&File> {
        self.records.iter().find(|f| {
            f.organization == organization && f.namespace == namespace && f.name == name
        })
    }

    /// Frequency counts for an allowlisted field; `None` if the field is not
    /// countable.
    pub fn counts_by(&self, field: &str) -> Option<Vec<ValueCount>> {
        if !FILE_COUNT_FIELDS.contains(&field) {
            return None;
        }
        Some(group_counts(&self.records, field))
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary {
            total: self.records.len(),
            by_type: group_counts(&self.records, "type"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::catalog::types::FilterParam;
    use serde_json::json;

    fn repo() -> FileRepository {
        FileRepository::new(seed::catalog_data().files)
    }

    #[test]
    fn numeric_size_filter_uses_string_coercion() {
        let repo = repo();
        let filters = FilterSet::from([(
            "size".to_string(),
            FilterParam::Scalar("123456".to_string()),
        )]);
        let page = repo.list(&filters, 1, 100);
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "FILE001");
    }

    #[test]
    fn counts_by_type_only() {
        let repo = repo();
        let counts = repo.counts_by("type").unwrap();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].value, json!("FASTQ"));
        assert!(repo.counts_by("size").is_none());
    }

    #[test]
    fn type_field_serializes_with_original_name() {
        let repo = repo();
        let file = repo.get("ExampleOrg", "StudyA", "FILE001").unwrap();
        let value = serde_json::to_value(file).unwrap();
        assert_eq!(value["type"], json!("FASTQ"));
        assert!(value.get("file_type").is_none());
    }
}
