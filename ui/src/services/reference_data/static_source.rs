use async_trait::async_trait;

use super::{Department, Faculty, ReferenceDataSource, ReferenceResult};

// (id, short name, full name)
const FACULTIES: &[(&str, &str, &str)] = &[
    ("1", "COPAS", "College of Pure and Applied Sciences"),
    ("2", "COLENSMA", "College of Environmental Sciences and Management"),
    ("3", "CASMAS", "College of Art, Social, and Management Science"),
    ("4", "COLAW", "College of Law"),
    ("5", "NURSING", "College of Nursing and Basic Medical Sciences"),
];

// (id, name, faculty id)
const DEPARTMENTS: &[(&str, &str, &str)] = &[
    ("1", "Computer Science", "1"),
    ("2", "Biochemistry", "1"),
    ("3", "Software Engineering", "1"),
    ("4", "Architecture", "2"),
    ("5", "Estate Management", "2"),
    ("6", "Business Administration", "3"),
    ("7", "Accounting", "3"),
    ("8", "Economics", "3"),
    ("9", "Public and Property Law", "4"),
    ("10", "Private and International Law", "4"),
    ("11", "Nursing Science", "5"),
    ("12", "Human Physiology", "5"),
];

/// In-memory reference data bundled with the app
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticReferenceData;

impl StaticReferenceData {
    pub fn new() -> Self {
        Self
    }

    pub fn faculties(&self) -> Vec<Faculty> {
        FACULTIES
            .iter()
            .map(|(id, name, full_name)| Faculty {
                id: id.to_string(),
                name: name.to_string(),
                full_name: full_name.to_string(),
            })
            .collect()
    }

    pub fn departments_for(&self, faculty_id: &str) -> Vec<Department> {
        DEPARTMENTS
            .iter()
            .filter(|(_, _, owner)| *owner == faculty_id)
            .map(|(id, name, owner)| Department {
                id: id.to_string(),
                name: name.to_string(),
                faculty_id: owner.to_string(),
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl ReferenceDataSource for StaticReferenceData {
    async fn list_faculties(&self) -> ReferenceResult<Vec<Faculty>> {
        Ok(self.faculties())
    }

    async fn list_departments(&self, faculty_id: &str) -> ReferenceResult<Vec<Department>> {
        Ok(self.departments_for(faculty_id))
    }
}
