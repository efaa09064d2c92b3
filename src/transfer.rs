//! JSON import and export.
//!
//! Import is two-phase: a batch is first validated as a whole into a
//! [`ValidationReport`], and only a valid report may be admitted. Admission
//! then goes record by record through the ordinary add operations; there is
//! no transaction, so a record rejected by a store does not undo the ones
//! before it.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::manager::DataManager;
use crate::models::{Book, BookInput, Speech, SpeechInput, SpeechStatus, Teacher, TeacherInput};
use crate::repo::SpeechRepo;
use crate::validation::{
    check_teacher_name, is_blank, is_valid_link, parse_iso_date, BOOK_TYPES, GRADES,
};

#[derive(thiserror::Error, Debug)]
pub enum TransferError {
    #[error("batch has {0} validation error(s); fix them before importing")]
    InvalidBatch(usize),
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not write export file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport<T> {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// Present only when the whole batch passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
}

impl<T> ValidationReport<T> {
    fn rejected(errors: Vec<String>) -> Self {
        Self { is_valid: false, errors, data: None }
    }

    fn from_parts(errors: Vec<String>, data: Vec<T>) -> Self {
        if errors.is_empty() {
            Self { is_valid: true, errors, data: Some(data) }
        } else {
            Self::rejected(errors)
        }
    }

    fn records(&self) -> Result<&[T], TransferError> {
        match (&self.data, self.is_valid) {
            (Some(data), true) => Ok(data),
            _ => Err(TransferError::InvalidBatch(self.errors.len().max(1))),
        }
    }
}

/// Records admitted from a validated batch, plus the ones a store refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary<T> {
    pub imported: Vec<T>,
    pub failures: Vec<String>,
}

impl<T> Default for ImportSummary<T> {
    fn default() -> Self {
        Self { imported: Vec::new(), failures: Vec::new() }
    }
}

// ---------------- validation ----------------

/// Collects errors for one batch item, prefixed with its 1-based position.
struct ItemCheck<'a> {
    item: &'a Map<String, Value>,
    position: usize,
    errors: &'a mut Vec<String>,
    failed: bool,
}

impl<'a> ItemCheck<'a> {
    fn error(&mut self, message: impl std::fmt::Display) {
        self.errors.push(format!("item {}: {message}", self.position));
        self.failed = true;
    }

    fn text(&mut self, field: &str) -> Option<String> {
        match self.item.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.error(format!("field \"{field}\" must be a string"));
                None
            }
        }
    }

    fn required(&mut self, field: &str) -> String {
        match self.text(field) {
            Some(s) if !is_blank(&s) => s,
            Some(_) | None => {
                if !self.failed_on(field) {
                    self.error(format!("field \"{field}\" is required"));
                }
                String::new()
            }
        }
    }

    fn failed_on(&self, field: &str) -> bool {
        let tag = format!("item {}: field \"{field}\"", self.position);
        self.errors.iter().any(|e| e.starts_with(&tag))
    }

    fn optional_link(&mut self, field: &str) -> String {
        let value = self.text(field).unwrap_or_default();
        if !is_blank(&value) && !is_valid_link(&value) {
            self.error(format!("field \"{field}\" is not a valid link"));
        }
        value
    }
}

fn parse_batch(json: &str) -> Result<Vec<Value>, Vec<String>> {
    let parsed: Value = serde_json::from_str(json).map_err(|e| vec![format!("invalid JSON: {e}")])?;
    let Value::Array(items) = parsed else {
        return Err(vec!["data must be a JSON array".to_string()]);
    };
    if items.is_empty() {
        return Err(vec!["the list is empty".to_string()]);
    }
    Ok(items)
}

fn validate_each<T>(
    json: &str,
    mut check: impl FnMut(&mut ItemCheck<'_>) -> T,
) -> ValidationReport<T> {
    let items = match parse_batch(json) {
        Ok(items) => items,
        Err(errors) => return ValidationReport::rejected(errors),
    };

    let mut errors = Vec::new();
    let mut data = Vec::with_capacity(items.len());
    for (index, value) in items.iter().enumerate() {
        let Value::Object(item) = value else {
            errors.push(format!("item {}: must be an object", index + 1));
            continue;
        };
        let mut ctx = ItemCheck { item, position: index + 1, errors: &mut errors, failed: false };
        let record = check(&mut ctx);
        if !ctx.failed {
            data.push(record);
        }
    }
    ValidationReport::from_parts(errors, data)
}

pub fn validate_books(json: &str) -> ValidationReport<BookInput> {
    validate_each(json, |item| {
        let input = BookInput {
            title: item.required("title"),
            subject_name: item.required("subjectName"),
            teacher_name: item.required("teacherName"),
            grade: item.required("grade"),
            book_type: item.required("bookType"),
            url: item.optional_link("url"),
            image: item.optional_link("image"),
        };
        if !input.grade.is_empty() && !GRADES.contains(&input.grade.as_str()) {
            item.error(format!("grade \"{}\" is not one of {}", input.grade, GRADES.join(", ")));
        }
        if !input.book_type.is_empty() && !BOOK_TYPES.contains(&input.book_type.as_str()) {
            item.error(format!(
                "book type \"{}\" is not one of {}",
                input.book_type,
                BOOK_TYPES.join(", ")
            ));
        }
        input
    })
}

pub fn validate_teachers(json: &str) -> ValidationReport<TeacherInput> {
    validate_each(json, |item| {
        let name = item.required("name");
        let subject_id = item.required("subjectId");
        if !name.is_empty() {
            if let Err(e) = check_teacher_name(&name) {
                item.error(e);
            }
        }
        TeacherInput { name, subject_id }
    })
}

pub fn validate_speeches(json: &str) -> ValidationReport<SpeechInput> {
    validate_each(json, |item| {
        let title = item.required("title");
        let content = item.required("content");
        let raw_date = item.required("scheduledDate");
        let scheduled_date = if raw_date.is_empty() {
            NaiveDate::default()
        } else {
            parse_iso_date(&raw_date).unwrap_or_else(|e| {
                item.error(format!("scheduledDate: {e}"));
                NaiveDate::default()
            })
        };
        let status = match item.text("status").as_deref() {
            None | Some("") | Some("scheduled") => SpeechStatus::Scheduled,
            Some("published") => SpeechStatus::Published,
            Some(other) => {
                item.error(format!("status \"{other}\" must be \"scheduled\" or \"published\""));
                SpeechStatus::Scheduled
            }
        };
        SpeechInput { title, content, scheduled_date, status }
    })
}

// ---------------- admission ----------------

fn admit<I: Clone, T, E: std::fmt::Display>(
    kind: &str,
    records: &[I],
    mut add: impl FnMut(I) -> Result<T, E>,
) -> ImportSummary<T> {
    let mut summary = ImportSummary::default();
    for (index, record) in records.iter().enumerate() {
        match add(record.clone()) {
            Ok(added) => summary.imported.push(added),
            Err(e) => summary.failures.push(format!("item {}: {e}", index + 1)),
        }
    }
    if summary.failures.is_empty() {
        info!(kind = kind, imported = summary.imported.len(), "import finished");
    } else {
        warn!(kind = kind, imported = summary.imported.len(), failed = summary.failures.len(), "import finished with failures");
    }
    summary
}

pub fn import_books(
    manager: &DataManager,
    report: &ValidationReport<BookInput>,
) -> Result<ImportSummary<Book>, TransferError> {
    Ok(admit("books", report.records()?, |input| manager.add_book(input)))
}

pub fn import_teachers(
    manager: &DataManager,
    report: &ValidationReport<TeacherInput>,
) -> Result<ImportSummary<Teacher>, TransferError> {
    Ok(admit("teachers", report.records()?, |input| manager.add_teacher(input)))
}

pub fn import_speeches(
    speeches: &dyn SpeechRepo,
    report: &ValidationReport<SpeechInput>,
) -> Result<ImportSummary<Speech>, TransferError> {
    Ok(admit("speeches", report.records()?, |input| speeches.add_speech(input)))
}

// ---------------- export ----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Books,
    Teachers,
    Speeches,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Books => "books",
            ExportKind::Teachers => "teachers",
            ExportKind::Speeches => "speeches",
        }
    }
}

/// `{type}-{YYYY-MM-DD}.json`
pub fn export_file_name(kind: ExportKind, date: NaiveDate) -> String {
    format!("{}-{}.json", kind.as_str(), date.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, TransferError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        info!(path = %path.display(), "export written");
        Ok(path)
    }
}

/// Pretty-print `items` (normally a filtered and sorted view) for download.
pub fn export_json<T: Serialize>(
    kind: ExportKind,
    items: &[T],
    date: NaiveDate,
) -> Result<ExportFile, TransferError> {
    Ok(ExportFile {
        file_name: export_file_name(kind, date),
        contents: serde_json::to_string_pretty(items)?,
    })
}

/// One-record sample of the import format, offered as `{type}-example.json`.
pub fn example_file(kind: ExportKind) -> Result<ExportFile, TransferError> {
    let sample = match kind {
        ExportKind::Books => json!([{
            "title": "Algebra I",
            "url": "https://example.com/algebra-1.pdf",
            "image": "https://example.com/algebra-1-cover.jpg",
            "subjectName": "Mathematics",
            "teacherName": "Dr. Ahmad Mohammed",
            "grade": "Grade 9",
            "bookType": "book"
        }]),
        ExportKind::Teachers => json!([{ "name": "Ms. Fatima Ahmad", "subjectId": "1" }]),
        ExportKind::Speeches => json!([{
            "title": "Morning address",
            "content": "Today is a new day for learning and growing...",
            "scheduledDate": "2024-01-15",
            "status": "scheduled"
        }]),
    };
    Ok(ExportFile {
        file_name: format!("{}-example.json", kind.as_str()),
        contents: serde_json::to_string_pretty(&sample)?,
    })
}
