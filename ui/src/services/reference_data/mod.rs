//! Reference data for the affiliation step
//!
//! Faculties and their departments populate the selection controls on the
//! last wizard step. The default source is the static table the platform
//! ships with; a remote lookup service can be swapped in through
//! [`ReferenceDataConfig`](crate::services::config::ReferenceDataConfig).
//!
//! Both sources follow the same contract: an empty or unknown faculty id
//! yields an empty department list rather than an error.

pub mod errors;
pub mod http_source;
pub mod static_source;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use errors::{ReferenceDataError, ReferenceResult};
pub use http_source::HttpReferenceData;
pub use static_source::StaticReferenceData;

/// A faculty (college) a department belongs to
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: String,
    /// Short name shown in the selector, e.g. "COPAS"
    pub name: String,
    pub full_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub faculty_id: String,
}

/// Lookup of faculties and departments - WASM-only, no Send bound
#[async_trait(?Send)]
pub trait ReferenceDataSource {
    /// List every faculty in display order
    async fn list_faculties(&self) -> ReferenceResult<Vec<Faculty>>;

    /// List the departments owned by `faculty_id`, empty for an unknown id
    async fn list_departments(&self, faculty_id: &str) -> ReferenceResult<Vec<Department>>;
}

/// Find a faculty by id in an already loaded list
pub fn find_faculty<'a>(faculties: &'a [Faculty], id: &str) -> Option<&'a Faculty> {
    faculties.iter().find(|faculty| faculty.id == id)
}

/// Find a department by id in an already loaded list
pub fn find_department<'a>(departments: &'a [Department], id: &str) -> Option<&'a Department> {
    departments.iter().find(|department| department.id == id)
}
