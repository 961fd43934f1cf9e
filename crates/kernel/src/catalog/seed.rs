//! Seed collections.
//!
//! Small in-memory data mimicking the shape of records the real graph or
//! database layer will return, used for early API development and contract
//! testing. A persistent backend replaces this module without touching the
//! repositories or anything above them.

use std::collections::BTreeMap;

use serde_json::json;

use super::CatalogData;
use super::file::File;
use super::namespace::Namespace;
use super::organization::Organization;
use super::sample::Sample;
use super::subject::Subject;

/// Build the seed catalog collections.
pub fn catalog_data() -> CatalogData {
    let organizations = vec![
        Organization {
            name: "ExampleOrg".to_string(),
            metadata: json!({ "description": "Example Organization" }),
        },
        Organization {
            name: "Treehouse".to_string(),
            metadata: json!({ "description": "UCSC Treehouse" }),
        },
    ];

    let namespaces = vec![
        Namespace {
            organization: "ExampleOrg".to_string(),
            namespace: "StudyA".to_string(),
            metadata: json!({ "study_id": "STUDY_A", "study_name": "Study Alpha" }),
        },
        Namespace {
            organization: "Treehouse".to_string(),
            namespace: "StudyB".to_string(),
            metadata: json!({ "study_id": "STUDY_B", "study_name": "Study Beta" }),
        },
    ];

    let subjects = vec![
        Subject {
            organization: "ExampleOrg".to_string(),
            namespace: "StudyA".to_string(),
            name: "SUBJ001".to_string(),
            sex: "Male".to_string(),
            race: "White".to_string(),
            ethnicity: "Not Hispanic or Latino".to_string(),
            vital_status: "Alive".to_string(),
            age_at_vital_status: 120,
            depositions: vec!["DBGAP:PHS001".to_string()],
            metadata: json!({
                "unharmonized": { "custom_field": "X1" },
                "associated_diagnoses": "Leukemia",
            }),
        },
        Subject {
            organization: "ExampleOrg".to_string(),
            namespace: "StudyA".to_string(),
            name: "SUBJ002".to_string(),
            sex: "Female".to_string(),
            race: "Asian".to_string(),
            ethnicity: "Not Reported".to_string(),
            vital_status: "Deceased".to_string(),
            age_at_vital_status: 90,
            depositions: vec![],
            metadata: json!({
                "unharmonized": { "custom_field": "X2" },
                "associated_diagnoses": "Lymphoma",
            }),
        },
        Subject {
            organization: "Treehouse".to_string(),
            namespace: "StudyB".to_string(),
            name: "SUBJ003".to_string(),
            sex: "Male".to_string(),
            race: "Black".to_string(),
            ethnicity: "Not Reported".to_string(),
            vital_status: "Alive".to_string(),
            age_at_vital_status: 60,
            depositions: vec!["DBGAP:PHS003".to_string()],
            metadata: json!({
                "unharmonized": { "custom_field": "X3" },
                "associated_diagnoses": "Neuroblastoma",
            }),
        },
    ];

    let samples = vec![
        Sample {
            organization: "ExampleOrg".to_string(),
            namespace: "StudyA".to_string(),
            name: "SAMP001".to_string(),
            disease_phase: "Initial Diagnosis".to_string(),
            anatomical_sites: vec!["Liver".to_string()],
            library_selection_method: "Poly-A Enriched Genomic Library".to_string(),
            library_strategy: "RNA-Seq".to_string(),
            library_source_material: "Bulk Tissue".to_string(),
            preservation_method: "FFPE".to_string(),
            tumor_grade: "Grade I".to_string(),
            specimen_molecular_analyte_type: "RNA".to_string(),
            tissue_type: "Tumor".to_string(),
            tumor_classification: "Primary".to_string(),
            age_at_diagnosis: 120,
            age_at_collection: 121,
            tumor_tissue_morphology: "TypeA".to_string(),
            depositions: vec![],
            diagnosis: "Leukemia".to_string(),
            metadata: json!({ "unharmonized": { "sample_extra": "A" } }),
        },
        Sample {
            organization: "ExampleOrg".to_string(),
            namespace: "StudyA".to_string(),
            name: "SAMP002".to_string(),
            disease_phase: "Relapse".to_string(),
            anatomical_sites: vec!["Bone".to_string()],
            library_selection_method: "Poly-A Enriched Genomic Library".to_string(),
            library_strategy: "RNA-Seq".to_string(),
            library_source_material: "Bulk Cells".to_string(),
            preservation_method: "Frozen".to_string(),
            tumor_grade: "Grade II".to_string(),
            specimen_molecular_analyte_type: "RNA".to_string(),
            tissue_type: "Tumor".to_string(),
            tumor_classification: "Metastatic".to_string(),
            age_at_diagnosis: 100,
            age_at_collection: 105,
            tumor_tissue_morphology: "TypeB".to_string(),
            depositions: vec![],
            diagnosis: "Lymphoma".to_string(),
            metadata: json!({ "unharmonized": { "sample_extra": "B" } }),
        },
        Sample {
            organization: "Treehouse".to_string(),
            namespace: "StudyB".to_string(),
            name: "SAMP003".to_string(),
            disease_phase: "Initial Diagnosis".to_string(),
            anatomical_sites: vec!["Brain".to_string()],
            library_selection_method: "Poly-A Enriched Genomic Library".to_string(),
            library_strategy: "RNA-Seq".to_string(),
            library_source_material: "Bulk Tissue".to_string(),
            preservation_method: "Frozen".to_string(),
            tumor_grade: "Grade III".to_string(),
            specimen_molecular_analyte_type: "RNA".to_string(),
            tissue_type: "Normal".to_string(),
            tumor_classification: "Primary".to_string(),
            age_at_diagnosis: 60,
            age_at_collection: 61,
            tumor_tissue_morphology: "TypeC".to_string(),
            depositions: vec![],
            diagnosis: "Neuroblastoma".to_string(),
            metadata: json!({ "unharmonized": { "sample_extra": "C" } }),
        },
    ];

    let files = vec![
        File {
            organization: "ExampleOrg".to_string(),
            namespace: "StudyA".to_string(),
            name: "FILE001".to_string(),
            file_type: "FASTQ".to_string(),
            size: 123_456,
            description: "RNA-Seq reads".to_string(),
            checksums: BTreeMap::from([("md5".to_string(), "abc123".to_string())]),
            depositions: vec![],
            metadata: json!({ "unharmonized": { "file_tag": "raw" } }),
        },
        File {
            organization: "ExampleOrg".to_string(),
            namespace: "StudyA".to_string(),
            name: "FILE002".to_string(),
            file_type: "BAM".to_string(),
            size: 654_321,
            description: "Aligned reads".to_string(),
            checksums: BTreeMap::from([("md5".to_string(), "def456".to_string())]),
            depositions: vec![],
            metadata: json!({ "unharmonized": { "file_tag": "aligned" } }),
        },
        File {
            organization: "Treehouse".to_string(),
            namespace: "StudyB".to_string(),
            name: "FILE003".to_string(),
            file_type: "VCF".to_string(),
            size: 111_111,
            description: "Variants".to_string(),
            checksums: BTreeMap::from([("md5".to_string(), "ghi789".to_string())]),
            depositions: vec![],
            metadata: json!({ "unharmonized": { "file_tag": "variants" } }),
        },
    ];

    CatalogData {
        organizations,
        namespaces,
        subjects,
        samples,
        files,
    }
}
