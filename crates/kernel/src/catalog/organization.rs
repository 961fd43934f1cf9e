//! Organization records and repository.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A data-contributing organization, keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub metadata: Value,
}

/// Read-only access to the organization collection.
#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    records: Vec<Organization>,
}

impl OrganizationRepository {
    pub fn new(records: Vec<Organization>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[Organization] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&Organization> {
        self.records.iter().find(|o| o.name == name)
    }
}
