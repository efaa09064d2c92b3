use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use super::{read_state, today, write_state, RepoError, RepoResult, TeacherRepo};
use crate::catalog::SubjectCatalog;
use crate::ids::new_id;
use crate::models::{Teacher, TeacherInput};

/// In-memory teacher collection. Every write resolves `subject_id` against the
/// catalog so `Teacher::subject` never drifts from it.
#[derive(Clone)]
pub struct TeacherStore {
    teachers: Arc<RwLock<Vec<Teacher>>>,
    subjects: SubjectCatalog,
}

impl TeacherStore {
    pub fn new(subjects: SubjectCatalog) -> Self {
        Self::with_teachers(subjects, Vec::new())
    }

    pub fn with_teachers(subjects: SubjectCatalog, teachers: Vec<Teacher>) -> Self {
        Self {
            teachers: Arc::new(RwLock::new(teachers)),
            subjects,
        }
    }

    fn resolve_subject(&self, subject_id: &str) -> RepoResult<String> {
        match self.subjects.find(subject_id) {
            Some(subject) => Ok(subject.name.clone()),
            None => {
                warn!(%subject_id, "subject lookup failed");
                Err(RepoError::SubjectNotFound(subject_id.to_string()))
            }
        }
    }
}

impl TeacherRepo for TeacherStore {
    fn list_teachers(&self) -> Vec<Teacher> {
        read_state(&self.teachers).clone()
    }

    fn get_teacher(&self, id: &str) -> Option<Teacher> {
        read_state(&self.teachers).iter().find(|t| t.id == id).cloned()
    }

    fn list_teachers_by_subject(&self, subject_id: &str) -> Vec<Teacher> {
        read_state(&self.teachers)
            .iter()
            .filter(|t| t.subject_id == subject_id)
            .cloned()
            .collect()
    }

    fn add_teacher(&self, input: TeacherInput) -> RepoResult<Teacher> {
        let subject = self.resolve_subject(&input.subject_id)?;
        let teacher = Teacher {
            id: new_id(),
            name: input.name.trim().to_string(),
            subject,
            subject_id: input.subject_id,
            date_added: today(),
        };
        write_state(&self.teachers).push(teacher.clone());
        info!(id = %teacher.id, subject = %teacher.subject, "teacher added");
        Ok(teacher)
    }

    fn update_teacher(&self, id: &str, input: TeacherInput) -> RepoResult<Option<Teacher>> {
        let mut teachers = write_state(&self.teachers);
        let Some(teacher) = teachers.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "update skipped, teacher not found");
            return Ok(None);
        };

        teacher.subject = self.resolve_subject(&input.subject_id)?;
        teacher.subject_id = input.subject_id;
        teacher.name = input.name.trim().to_string();

        let updated = teacher.clone();
        drop(teachers);
        info!(%id, "teacher updated");
        Ok(Some(updated))
    }

    fn delete_teacher(&self, id: &str) -> bool {
        let mut teachers = write_state(&self.teachers);
        let before = teachers.len();
        teachers.retain(|t| t.id != id);
        let removed = teachers.len() < before;
        drop(teachers);
        if removed {
            info!(%id, "teacher deleted");
        }
        removed
    }
}
