use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use super::{now_millis, read_state, today, write_state, BookRepo};
use crate::catalog::SubjectCatalog;
use crate::ids::{new_id, BookCodeSequence};
use crate::models::{Book, BookInput, Subject};

#[derive(Default)]
struct State {
    books: Vec<Book>,
    codes: BookCodeSequence,
}

/// In-memory book collection. Cloning yields another handle to the same
/// collection.
#[derive(Clone)]
pub struct BookStore {
    state: Arc<RwLock<State>>,
    subjects: SubjectCatalog,
}

impl BookStore {
    pub fn new(subjects: SubjectCatalog) -> Self {
        Self::with_books(subjects, Vec::new())
    }

    /// Start from existing records; new codes continue after the highest one.
    pub fn with_books(subjects: SubjectCatalog, books: Vec<Book>) -> Self {
        let codes = BookCodeSequence::starting_after(books.iter().map(|b| b.book_id.as_str()));
        Self {
            state: Arc::new(RwLock::new(State { books, codes })),
            subjects,
        }
    }

    pub fn len(&self) -> usize {
        read_state(&self.state).books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BookRepo for BookStore {
    fn list_books(&self) -> Vec<Book> {
        read_state(&self.state).books.clone()
    }

    fn list_subjects(&self) -> Vec<Subject> {
        self.subjects.list()
    }

    fn add_book(&self, input: BookInput) -> Book {
        let input = input.normalized();
        let mut s = write_state(&self.state);
        let book = Book {
            id: new_id(),
            book_id: s.codes.next_code(),
            title: input.title,
            url: input.url,
            image: input.image,
            subject_name: input.subject_name,
            teacher_name: input.teacher_name,
            grade: input.grade,
            book_type: input.book_type,
            time_clicked: now_millis(),
            click_count: 0,
            favorites_count: 0,
            date_added: today(),
        };
        s.books.push(book.clone());
        drop(s);
        info!(id = %book.id, code = %book.book_id, "book added");
        book
    }

    fn update_book(&self, id: &str, input: BookInput) -> Option<Book> {
        let input = input.normalized();
        let mut s = write_state(&self.state);
        let Some(book) = s.books.iter_mut().find(|b| b.id == id) else {
            debug!(%id, "update skipped, book not found");
            return None;
        };

        book.title = input.title;
        book.url = input.url;
        book.image = input.image;
        book.subject_name = input.subject_name;
        book.teacher_name = input.teacher_name;
        book.grade = input.grade;
        book.book_type = input.book_type;
        // strictly later than the previous stamp, even within the same millisecond
        book.time_clicked = now_millis().max(book.time_clicked + 1);

        let updated = book.clone();
        drop(s);
        info!(%id, code = %updated.book_id, "book updated");
        Some(updated)
    }

    fn delete_book(&self, id: &str) -> bool {
        let mut s = write_state(&self.state);
        let before = s.books.len();
        s.books.retain(|b| b.id != id);
        let removed = s.books.len() < before;
        drop(s);
        if removed {
            info!(%id, "book deleted");
        } else {
            debug!(%id, "delete skipped, book not found");
        }
        removed
    }
}
