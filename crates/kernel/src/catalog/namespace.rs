//! Namespace records and repository.
//!
//! Namespaces carry study-level context within an organization; the surface
//! is list + lookup only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A study namespace, keyed by `(organization, namespace)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    pub organization: String,
    pub namespace: String,
    pub metadata: Value,
}

/// Read-only access to the namespace collection.
#[derive(Debug, Clone)]
pub struct NamespaceRepository {
    records: Vec<Namespace>,
}

impl NamespaceRepository {
    pub fn new(records: Vec<Namespace>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[Namespace] {
        &self.records
    }

    pub fn get(&self, organization: &str, namespace: &str) -> Option<&Namespace> {
        self.records
            .iter()
            .find(|n| n.organization == organization && n.namespace == namespace)
    }
}
