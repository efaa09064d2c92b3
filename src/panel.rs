//! Composition root. Every store is built once here and handed to the parts
//! that need it; nothing in the crate reaches for a global instance.

use std::sync::Arc;

use tracing::info;

use crate::alerts::AlertManager;
use crate::catalog::SubjectCatalog;
use crate::manager::DataManager;
use crate::models::{Alert, Book, Speech, Subject, Teacher};
use crate::repo::{BookStore, SpeechStore, TeacherStore};
use crate::seed;
use crate::settings::AppConfig;

pub struct AdminPanel {
    subjects: SubjectCatalog,
    books: BookStore,
    teachers: TeacherStore,
    speeches: SpeechStore,
    manager: DataManager,
    alerts: AlertManager,
}

impl AdminPanel {
    pub fn new(
        subjects: Vec<Subject>,
        books: Vec<Book>,
        teachers: Vec<Teacher>,
        speeches: Vec<Speech>,
        alerts: Vec<Alert>,
    ) -> Self {
        let subjects = SubjectCatalog::new(subjects);
        let books = BookStore::with_books(subjects.clone(), books);
        let teachers = TeacherStore::with_teachers(subjects.clone(), teachers);
        let manager = DataManager::new(Arc::new(books.clone()), Arc::new(teachers.clone()));
        Self {
            subjects,
            books,
            teachers,
            speeches: SpeechStore::with_speeches(speeches),
            manager,
            alerts: AlertManager::new(alerts),
        }
    }

    /// Demo subjects only; no books, teachers, speeches or alerts.
    pub fn empty() -> Self {
        Self::new(seed::subjects(), Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    pub fn seeded() -> Self {
        Self::new(
            seed::subjects(),
            seed::books(),
            seed::teachers(),
            seed::speeches(),
            seed::alerts(),
        )
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let panel = if config.seed_demo_data { Self::seeded() } else { Self::empty() };
        let panel = panel.with_alert_page_size(config.alert_page_size);
        info!(
            seeded = config.seed_demo_data,
            subjects = panel.subjects.len(),
            books = panel.books.len(),
            teachers = panel.manager.list_teachers().len(),
            alerts = panel.alerts.alerts().len(),
            "admin panel ready"
        );
        panel
    }

    pub fn with_alert_page_size(mut self, page_size: usize) -> Self {
        self.alerts = self.alerts.with_page_size(page_size);
        self
    }

    pub fn manager(&self) -> &DataManager {
        &self.manager
    }

    pub fn subjects(&self) -> &SubjectCatalog {
        &self.subjects
    }

    pub fn books(&self) -> &BookStore {
        &self.books
    }

    pub fn teachers(&self) -> &TeacherStore {
        &self.teachers
    }

    pub fn speeches(&self) -> &SpeechStore {
        &self.speeches
    }

    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> &mut AlertManager {
        &mut self.alerts
    }
}
