//! Sample records and repository.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query::{apply_filters, group_counts, paginate};
use super::types::{FieldValue, FilterSet, ListPage, Queryable, ValueCount};

/// Query keys accepted when filtering sample listings.
pub const SAMPLE_FILTER_FIELDS: &[&str] = &[
    "disease_phase",
    "anatomical_sites",
    "library_selection_method",
    "library_strategy",
    "library_source_material",
    "preservation_method",
    "tumor_grade",
    "specimen_molecular_analyte_type",
    "tissue_type",
    "tumor_classification",
    "age_at_diagnosis",
    "age_at_collection",
    "tumor_tissue_morphology",
    "depositions",
    "diagnosis",
];

/// Fields samples can be counted by.
pub const SAMPLE_COUNT_FIELDS: &[&str] = &[
    "disease_phase",
    "tissue_type",
    "tumor_classification",
    "diagnosis",
];

/// A biospecimen, keyed by `(organization, namespace, name)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub organization: String,
    pub namespace: String,
    pub name: String,
    pub disease_phase: String,
    pub anatomical_sites: Vec<String>,
    pub library_selection_method: String,
    pub library_strategy: String,
    pub library_source_material: String,
    pub preservation_method: String,
    pub tumor_grade: String,
    pub specimen_molecular_analyte_type: String,
    pub tissue_type: String,
    pub tumor_classification: String,
    pub age_at_diagnosis: i64,
    pub age_at_collection: i64,
    pub tumor_tissue_morphology: String,
    pub depositions: Vec<String>,
    pub diagnosis: String,
    pub metadata: Value,
}

impl Queryable for Sample {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "disease_phase" => Some(FieldValue::Text(self.disease_phase.clone())),
            "anatomical_sites" => Some(FieldValue::List(self.anatomical_sites.clone())),
            "library_selection_method" => {
                Some(FieldValue::Text(self.library_selection_method.clone()))
            }
            "library_strategy" => Some(FieldValue::Text(self.library_strategy.clone())),
            "library_source_material" => {
                Some(FieldValue::Text(self.library_source_material.clone()))
            }
            "preservation_method" => Some(FieldValue::Text(self.preservation_method.clone())),
            "tumor_grade" => Some(FieldValue::Text(self.tumor_grade.clone())),
            "specimen_molecular_analyte_type" => {
                Some(FieldValue::Text(self.specimen_molecular_analyte_type.clone()))
            }
            "tissue_type" => Some(FieldValue::Text(self.tissue_type.clone())),
            "tumor_classification" => Some(FieldValue::Text(self.tumor_classification.clone())),
            "age_at_diagnosis" => Some(FieldValue::Int(self.age_at_diagnosis)),
            "age_at_collection" => Some(FieldValue::Int(self.age_at_collection)),
            "tumor_tissue_morphology" => {
                Some(FieldValue::Text(self.tumor_tissue_morphology.clone()))
            }
            "depositions" => Some(FieldValue::List(self.depositions.clone())),
            "diagnosis" => Some(FieldValue::Text(self.diagnosis.clone())),
            _ => None,
        }
    }
}

/// Fixed aggregate returned by the sample summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSummary {
    pub total: usize,
    pub by_disease_phase: Vec<ValueCount>,
    pub by_tissue_type: Vec<ValueCount>,
}

/// Read-only access to the sample collection.
#[derive(Debug, Clone)]
pub struct SampleRepository {
    records: Vec<Sample>,
}

impl SampleRepository {
    pub fn new(records: Vec<Sample>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[Sample] {
        &self.records
    }

    /// Filtered, paginated listing. `total` is the filtered count.
    pub fn list(&self, filters: &FilterSet, page: usize, per_page: usize) -> ListPage<Sample> {
        let filtered = apply_filters(&self.records, filters, SAMPLE_FILTER_FIELDS);
        let total = filtered.len();
        let data = paginate(&filtered, page, per_page)
            .iter()
            .map(|s| (*s).clone())
            .collect();
        ListPage { data, total }
    }

    /// Composite-key lookup.
    pub fn get(&self, organization: &str, namespace: &str, name: &str) -> Option<&Sample> {
        self.records.iter().find(|s| {
            s.organization == organization && s.namespace == namespace && s.name == name
        })
    }

    /// Frequency counts for an allowlisted field; `None` if the field is not
    /// countable.
    pub fn counts_by(&self, field: &str) -> Option<Vec<ValueCount>> {
        if !SAMPLE_COUNT_FIELDS.contains(&field) {
            return None;
        }
        Some(group_counts(&self.records, field))
    }

    pub fn summary(&self) -> SampleSummary {
        SampleSummary {
            total: self.records.len(),
            by_disease_phase: group_counts(&self.records, "disease_phase"),
            by_tissue_type: group_counts(&self.records, "tissue_type"),
        }
    }

    /// Case-insensitive substring search over the diagnosis field.
    pub fn search_diagnosis(&self, term: &str) -> Vec<&Sample> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|s| s.diagnosis.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::catalog::types::FilterParam;
    use serde_json::json;

    fn repo() -> SampleRepository {
        SampleRepository::new(seed::catalog_data().samples)
    }

    #[test]
    fn list_filters_then_paginates() {
        let repo = repo();
        let filters = FilterSet::from([(
            "tissue_type".to_string(),
            FilterParam::Scalar("Tumor".to_string()),
        )]);
        let page = repo.list(&filters, 1, 1);
        assert_eq!(page.total, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].tissue_type, "Tumor");
    }

    #[test]
    fn anatomical_site_filter_matches_single_element_lists() {
        let repo = repo();
        let filters = FilterSet::from([(
            "anatomical_sites".to_string(),
            FilterParam::Scalar("Liver".to_string()),
        )]);
        let page = repo.list(&filters, 1, 100);
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "SAMP001");
    }

    #[test]
    fn diagnosis_counts_come_back_in_first_seen_order() {
        let counts = repo().counts_by("diagnosis").unwrap();
        let values: Vec<_> = counts.iter().map(|c| c.value.clone()).collect();
        assert_eq!(
            values,
            vec![json!("Leukemia"), json!("Lymphoma"), json!("Neuroblastoma")]
        );
        assert!(counts.iter().all(|c| c.count == 1));
    }

    #[test]
    fn summary_has_fixed_dimensions() {
        let summary = repo().summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_tissue_type.len(), 2);
        let tumor = &summary.by_tissue_type[0];
        assert_eq!(tumor.value, json!("Tumor"));
        assert_eq!(tumor.count, 2);
    }
}
