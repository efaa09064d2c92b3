use std::sync::Arc;

use crate::models::Subject;

/// Read-only list of subjects. Clones share the same backing slice.
#[derive(Debug, Clone, Default)]
pub struct SubjectCatalog {
    subjects: Arc<[Subject]>,
}

impl SubjectCatalog {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects: subjects.into() }
    }

    pub fn list(&self) -> Vec<Subject> {
        self.subjects.to_vec()
    }

    pub fn find(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
