//! Subject records and repository.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query::{apply_filters, group_counts, paginate};
use super::types::{FieldValue, FilterSet, ListPage, Queryable, ValueCount};

/// Query keys accepted when filtering subject listings.
pub const SUBJECT_FILTER_FIELDS: &[&str] = &[
    "sex",
    "race",
    "ethnicity",
    "vital_status",
    "age_at_vital_status",
    "identifiers",
    "depositions",
];

/// Fields subjects can be counted by.
pub const SUBJECT_COUNT_FIELDS: &[&str] = &["sex", "race", "ethnicity", "vital_status"];

/// A study participant, keyed by `(organization, namespace, name)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub organization: String,
    pub namespace: String,
    pub name: String,
    pub sex: String,
    pub race: String,
    pub ethnicity: String,
    pub vital_status: String,
    pub age_at_vital_status: i64,
    pub depositions: Vec<String>,
    pub metadata: Value,
}

impl Queryable for Subject {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "sex" => Some(FieldValue::Text(self.sex.clone())),
            "race" => Some(FieldValue::Text(self.race.clone())),
            "ethnicity" => Some(FieldValue::Text(self.ethnicity.clone())),
            "vital_status" => Some(FieldValue::Text(self.vital_status.clone())),
            "age_at_vital_status" => Some(FieldValue::Int(self.age_at_vital_status)),
            "depositions" => Some(FieldValue::List(self.depositions.clone())),
            _ => None,
        }
    }
}

/// Fixed aggregate returned by the subject summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub total: usize,
    pub by_sex: Vec<ValueCount>,
    pub by_race: Vec<ValueCount>,
}

/// Read-only access to the subject collection.
#[derive(Debug, Clone)]
pub struct SubjectRepository {
    records: Vec<Subject>,
}

impl SubjectRepository {
    pub fn new(records: Vec<Subject>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[Subject] {
        &self.records
    }

    /// Filtered, paginated listing. `total` is the filtered count.
    pub fn list(&self, filters: &FilterSet, page: usize, per_page: usize) -> ListPage<Subject> {
        let filtered = apply_filters(&self.records, filters, SUBJECT_FILTER_FIELDS);
        let total = filtered.len();
        let data = paginate(&filtered, page, per_page)
            .iter()
            .map(|s| (*s).clone())
            .collect();
        ListPage { data, total }
    }

    /// Composite-key lookup.
    pub fn get(&self, organization: &str, namespace: &str, name: &str) -> Option<&Subject> {
        self.records.iter().find(|s| {
            s.organization == organization && s.namespace == namespace && s.name == name
        })
    }

    /// Frequency counts for an allowlisted field; `None` if the field is not
    /// countable.
    pub fn counts_by(&self, field: &str) -> Option<Vec<ValueCount>> {
        if !SUBJECT_COUNT_FIELDS.contains(&field) {
            return None;
        }
        Some(group_counts(&self.records, field))
    }

    pub fn summary(&self) -> SubjectSummary {
        SubjectSummary {
            total: self.records.len(),
            by_sex: group_counts(&self.records, "sex"),
            by_race: group_counts(&self.records, "race"),
        }
    }

    /// Case-insensitive substring search over associated diagnoses.
    ///
    /// No allowlist involvement: this leans on the engine-independent path
    /// and returns the full match set for the caller to paginate.
    pub fn search_diagnosis(&self, term: &str) -> Vec<&Subject> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|s| {
                s.metadata
                    .get("associated_diagnoses")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
            })
            .collect()
    }
}
