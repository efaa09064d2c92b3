use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};

use crate::models::*;

pub mod books;
pub mod speeches;
pub mod teachers;

pub use books::BookStore;
pub use speeches::SpeechStore;
pub use teachers::TeacherStore;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    #[error("subject not found: {0}")]
    SubjectNotFound(String),
    /// Deleting the teacher would leave books pointing at a missing name.
    #[error("cannot delete teacher \"{teacher}\": {count} book(s) still reference them")]
    TeacherHasBooks { teacher: String, count: usize },
    #[error("invalid input: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("a speech is already scheduled for {0}")]
    DuplicateSpeechDate(NaiveDate),
}

pub type RepoResult<T> = Result<T, RepoError>;

// "Not found" is an expected outcome, so lookups and mutations by id report it
// through Option/bool rather than through RepoError.

pub trait BookRepo: Send + Sync {
    fn list_books(&self) -> Vec<Book>;
    fn list_subjects(&self) -> Vec<Subject>;
    fn add_book(&self, input: BookInput) -> Book;
    fn update_book(&self, id: &str, input: BookInput) -> Option<Book>;
    fn delete_book(&self, id: &str) -> bool;
}

pub trait TeacherRepo: Send + Sync {
    fn list_teachers(&self) -> Vec<Teacher>;
    fn get_teacher(&self, id: &str) -> Option<Teacher>;
    fn list_teachers_by_subject(&self, subject_id: &str) -> Vec<Teacher>;
    fn add_teacher(&self, input: TeacherInput) -> RepoResult<Teacher>;
    fn update_teacher(&self, id: &str, input: TeacherInput) -> RepoResult<Option<Teacher>>;
    fn delete_teacher(&self, id: &str) -> bool;
}

pub trait SpeechRepo: Send + Sync {
    fn list_speeches(&self) -> Vec<Speech>;
    fn get_speech(&self, id: &str) -> Option<Speech>;
    fn find_speech_by_date(&self, date: NaiveDate) -> Option<Speech>;
    fn add_speech(&self, input: SpeechInput) -> RepoResult<Speech>;
    fn update_speech(&self, id: &str, input: SpeechInput) -> RepoResult<Option<Speech>>;
    fn delete_speech(&self, id: &str) -> bool;
}

// A panic while a guard was held cannot leave a half-written record behind
// (every mutation is a single push/replace/remove), so poisoned locks are
// taken over rather than propagated.
fn read_state<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_state<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
