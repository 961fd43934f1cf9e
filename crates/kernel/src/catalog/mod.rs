//! In-memory biomedical data catalog.
//!
//! Entity repositories compose the query engine ([`query`]) over immutable
//! collections, each declaring which fields may be filtered and counted.
//! The catalog is constructed explicitly and injected via application state
//! — no globals — so tests can build isolated fixtures with their own data.

pub mod file;
pub mod namespace;
pub mod organization;
pub mod query;
pub mod sample;
pub mod seed;
pub mod subject;
pub mod types;

pub use file::{FILE_COUNT_FIELDS, FILE_FILTER_FIELDS, File, FileRepository, FileSummary};
pub use namespace::{Namespace, NamespaceRepository};
pub use organization::{Organization, OrganizationRepository};
pub use sample::{
    SAMPLE_COUNT_FIELDS, SAMPLE_FILTER_FIELDS, Sample, SampleRepository, SampleSummary,
};
pub use subject::{
    SUBJECT_COUNT_FIELDS, SUBJECT_FILTER_FIELDS, Subject, SubjectRepository, SubjectSummary,
};
pub use types::{FieldValue, FilterParam, FilterSet, ListPage, Queryable, ValueCount};

/// Raw collections used to construct a [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub organizations: Vec<Organization>,
    pub namespaces: Vec<Namespace>,
    pub subjects: Vec<Subject>,
    pub samples: Vec<Sample>,
    pub files: Vec<File>,
}

/// The assembled read-only catalog, one repository per entity kind.
#[derive(Debug, Clone)]
pub struct Catalog {
    organizations: OrganizationRepository,
    namespaces: NamespaceRepository,
    subjects: SubjectRepository,
    samples: SampleRepository,
    files: FileRepository,
}

impl Catalog {
    /// Assemble a catalog from explicit collections.
    pub fn new(data: CatalogData) -> Self {
        Self {
            organizations: OrganizationRepository::new(data.organizations),
            namespaces: NamespaceRepository::new(data.namespaces),
            subjects: SubjectRepository::new(data.subjects),
            samples: SampleRepository::new(data.samples),
            files: FileRepository::new(data.files),
        }
    }

    /// Catalog backed by the built-in seed collections.
    pub fn seeded() -> Self {
        Self::new(seed::catalog_data())
    }

    pub fn organizations(&self) -> &OrganizationRepository {
        &self.organizations
    }

    pub fn namespaces(&self) -> &NamespaceRepository {
        &self.namespaces
    }

    pub fn subjects(&self) -> &SubjectRepository {
        &self.subjects
    }

    pub fn samples(&self) -> &SampleRepository {
        &self.samples
    }

    pub fn files(&self) -> &FileRepository {
        &self.files
    }
}
