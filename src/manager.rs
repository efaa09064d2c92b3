//! Façade over the book and teacher stores.
//!
//! The manager owns no records itself. It validates direct input, enforces
//! the one rule that spans both stores (a teacher cannot be removed while
//! books still carry their name) and tells subscribers about every
//! successful mutation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::events::{EventBus, EventKind, Subscription};
use crate::models::*;
use crate::repo::{BookRepo, RepoError, RepoResult, TeacherRepo};
use crate::validation::{validate_book_input, validate_teacher_input};

#[derive(Clone)]
pub struct DataManager {
    books: Arc<dyn BookRepo>,
    teachers: Arc<dyn TeacherRepo>,
    events: EventBus,
}

impl DataManager {
    pub fn new(books: Arc<dyn BookRepo>, teachers: Arc<dyn TeacherRepo>) -> Self {
        Self {
            books,
            teachers,
            events: EventBus::new(),
        }
    }

    pub fn subscribe<F>(&self, kind: EventKind, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.events.subscribe(kind, callback)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.events.unsubscribe(subscription)
    }

    // ---------------- teachers ----------------

    pub fn list_teachers(&self) -> Vec<Teacher> {
        self.teachers.list_teachers()
    }

    pub fn get_teacher(&self, id: &str) -> Option<Teacher> {
        self.teachers.get_teacher(id)
    }

    pub fn list_teachers_by_subject(&self, subject_id: &str) -> Vec<Teacher> {
        self.teachers.list_teachers_by_subject(subject_id)
    }

    pub fn add_teacher(&self, input: TeacherInput) -> RepoResult<Teacher> {
        validate_teacher_input(&input).map_err(RepoError::Validation)?;
        let teacher = self.teachers.add_teacher(input)?;
        self.events.emit(EventKind::TeacherAdded);
        Ok(teacher)
    }

    /// Books keep the name they were saved with, so a rename leaves them
    /// pointing at the old name and no longer guarded by [`delete_teacher`].
    ///
    /// [`delete_teacher`]: DataManager::delete_teacher
    pub fn update_teacher(&self, id: &str, input: TeacherInput) -> RepoResult<Option<Teacher>> {
        if self.teachers.get_teacher(id).is_none() {
            debug!(%id, "update skipped, teacher not found");
            return Ok(None);
        }
        validate_teacher_input(&input).map_err(RepoError::Validation)?;
        let updated = self.teachers.update_teacher(id, input)?;
        if updated.is_some() {
            self.events.emit(EventKind::TeacherUpdated);
        }
        Ok(updated)
    }

    /// `Ok(false)` when no teacher has this id. Fails with
    /// [`RepoError::TeacherHasBooks`] while any book carries the teacher's
    /// name; nothing is removed and no event fires in that case.
    pub fn delete_teacher(&self, id: &str) -> RepoResult<bool> {
        let Some(teacher) = self.teachers.get_teacher(id) else {
            debug!(%id, "delete skipped, teacher not found");
            return Ok(false);
        };

        let count = self.count_books_by_teacher_name(&teacher.name);
        if count > 0 {
            warn!(%id, name = %teacher.name, count, "teacher still referenced by books");
            return Err(RepoError::TeacherHasBooks {
                teacher: teacher.name,
                count,
            });
        }

        let removed = self.teachers.delete_teacher(id);
        if removed {
            self.events.emit(EventKind::TeacherDeleted);
        }
        Ok(removed)
    }

    /// Id/name pairs for teacher pickers, in store order.
    pub fn teacher_options(&self) -> Vec<TeacherOption> {
        self.list_teachers()
            .into_iter()
            .map(|t| TeacherOption { id: t.id, name: t.name })
            .collect()
    }

    // ---------------- books ----------------

    pub fn list_books(&self) -> Vec<Book> {
        self.books.list_books()
    }

    pub fn add_book(&self, input: BookInput) -> RepoResult<Book> {
        validate_book_input(&input).map_err(RepoError::Validation)?;
        let book = self.books.add_book(input);
        self.events.emit(EventKind::BookAdded);
        Ok(book)
    }

    pub fn update_book(&self, id: &str, input: BookInput) -> RepoResult<Option<Book>> {
        if !self.books.list_books().iter().any(|b| b.id == id) {
            debug!(%id, "update skipped, book not found");
            return Ok(None);
        }
        validate_book_input(&input).map_err(RepoError::Validation)?;
        let updated = self.books.update_book(id, input);
        if updated.is_some() {
            self.events.emit(EventKind::BookUpdated);
        }
        Ok(updated)
    }

    pub fn delete_book(&self, id: &str) -> bool {
        let removed = self.books.delete_book(id);
        if removed {
            self.events.emit(EventKind::BookDeleted);
        }
        removed
    }

    pub fn books_by_teacher_name(&self, name: &str) -> Vec<Book> {
        self.list_books()
            .into_iter()
            .filter(|b| b.teacher_name == name)
            .collect()
    }

    pub fn count_books_by_teacher_name(&self, name: &str) -> usize {
        self.books_by_teacher_name(name).len()
    }

    // ---------------- subjects ----------------

    pub fn list_subjects(&self) -> Vec<Subject> {
        self.books.list_subjects()
    }
}
