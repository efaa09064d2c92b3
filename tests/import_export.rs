use chrono::NaiveDate;
use school_admin::listing::{book_view, teacher_view, BookSortKey, ListQuery, SortOrder, TeacherSortKey};
use school_admin::models::Book;
use school_admin::repo::SpeechStore;
use school_admin::transfer::*;
use school_admin::{AdminPanel, EventKind};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn valid_book() -> serde_json::Value {
    json!({
        "title": "Biology Basics",
        "url": "example.com/bio.pdf",
        "subjectName": "Biology",
        "teacherName": "Ms. Fatima Ali",
        "grade": "Grade 10",
        "bookType": "book"
    })
}

#[test]
fn malformed_batches_are_rejected_whole() {
    let not_json = validate_books("{oops");
    assert!(!not_json.is_valid);
    assert!(not_json.errors[0].starts_with("invalid JSON"));

    let not_array = validate_books(r#"{"title":"x"}"#);
    assert_eq!(not_array.errors, vec!["data must be a JSON array".to_string()]);

    let empty = validate_teachers("[]");
    assert_eq!(empty.errors, vec!["the list is empty".to_string()]);
    assert!(empty.data.is_none());
}

#[test]
fn book_errors_name_position_and_field() {
    let mut second = valid_book();
    second["grade"] = json!("Grade 13");
    second["title"] = json!("");
    second["url"] = json!("not a link");
    let batch = json!([valid_book(), second, 42]).to_string();

    let report = validate_books(&batch);

    assert!(!report.is_valid);
    assert!(report.data.is_none());
    assert!(report.errors.contains(&"item 2: field \"title\" is required".to_string()));
    assert!(report.errors.iter().any(|e| e.starts_with("item 2: grade \"Grade 13\"")));
    assert!(report.errors.iter().any(|e| e.starts_with("item 2: field \"url\" is not a valid link")));
    assert!(report.errors.contains(&"item 3: must be an object".to_string()));
    assert!(!report.errors.iter().any(|e| e.starts_with("item 1:")));
}

#[test]
fn wrong_types_are_reported() {
    let report = validate_books(&json!([{ "title": 7, "subjectName": "Art", "teacherName": "Mr. X", "grade": "Grade 6", "bookType": "book" }]).to_string());
    assert_eq!(report.errors, vec!["item 1: field \"title\" must be a string".to_string()]);
}

#[test]
fn valid_batch_is_imported_through_the_manager() {
    let panel = AdminPanel::seeded();
    let added = Arc::new(AtomicUsize::new(0));
    let a = Arc::clone(&added);
    panel.manager().subscribe(EventKind::BookAdded, move || {
        a.fetch_add(1, Ordering::SeqCst);
    });

    let report = validate_books(&json!([valid_book(), valid_book()]).to_string());
    assert!(report.is_valid);
    let summary = import_books(panel.manager(), &report).unwrap();

    assert_eq!(summary.imported.len(), 2);
    assert!(summary.failures.is_empty());
    assert_eq!(summary.imported[0].book_id, "BOOK-006");
    assert_eq!(summary.imported[1].book_id, "BOOK-007");
    assert_eq!(summary.imported[0].image, "unknown");
    assert_eq!(added.load(Ordering::SeqCst), 2);
}

#[test]
fn invalid_report_cannot_be_imported() {
    let panel = AdminPanel::seeded();
    let report = validate_books("[]");
    assert!(matches!(import_books(panel.manager(), &report), Err(TransferError::InvalidBatch(1))));
    assert_eq!(panel.manager().list_books().len(), 5);
}

#[test]
fn teacher_import_is_admitted_record_by_record() {
    let panel = AdminPanel::seeded();
    let batch = json!([
        { "name": "Mr. Aso Rashid", "subjectId": "6" },
        { "name": "Dr. Rozhan Yousif", "subjectId": "404" },
        { "name": "Mr. Barzan Saeed", "subjectId": "10" }
    ]);
    let report = validate_teachers(&batch.to_string());
    assert!(report.is_valid, "{:?}", report.errors);

    let summary = import_teachers(panel.manager(), &report).unwrap();

    assert_eq!(summary.imported.len(), 2);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].starts_with("item 2:"));
    assert_eq!(panel.manager().list_teachers().len(), 7);
}

#[test]
fn teacher_names_need_an_honorific() {
    let report = validate_teachers(&json!([{ "name": "Aso", "subjectId": "6" }]).to_string());
    assert!(!report.is_valid);
    assert!(report.errors[0].starts_with("item 1: teacher name must start with"));
}

#[test]
fn speeches_validate_dates_and_status() {
    let batch = json!([
        { "title": "A", "content": "a", "scheduledDate": "2024-05-01" },
        { "title": "B", "content": "b", "scheduledDate": "01/05/2024", "status": "draft" }
    ]);
    let report = validate_speeches(&batch.to_string());
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors.iter().all(|e| e.starts_with("item 2:")));

    let ok = validate_speeches(&serde_json::Value::Array(vec![batch[0].clone()]).to_string());
    let store = SpeechStore::new();
    let summary = import_speeches(&store, &ok).unwrap();
    assert_eq!(summary.imported[0].scheduled_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

    // same date again: admitted batch, refused by the store
    let again = import_speeches(&store, &ok).unwrap();
    assert!(again.imported.is_empty());
    assert_eq!(again.failures.len(), 1);
}

#[test]
fn export_writes_the_filtered_view() {
    let panel = AdminPanel::seeded();
    let query = ListQuery { search: "grade 1".into(), sort_by: BookSortKey::ClickCount, order: SortOrder::Desc };
    let view = book_view(&panel.manager().list_books(), &query);
    assert_eq!(view.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), vec!["1", "2", "3"]);

    let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let file = export_json(ExportKind::Books, &view, date).unwrap();
    assert_eq!(file.file_name, "books-2024-06-30.json");

    let dir = tempfile::tempdir().unwrap();
    let path = file.write_to(dir.path()).unwrap();
    let back: Vec<Book> = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(back, view);
    assert!(file.contents.contains("\"bookId\": \"BOOK-001\""));
}

#[test]
fn teacher_view_sorts_by_name() {
    let panel = AdminPanel::seeded();
    let query = ListQuery { search: String::new(), sort_by: TeacherSortKey::Name, order: SortOrder::Asc };
    let view = teacher_view(&panel.manager().list_teachers(), &query);
    assert_eq!(view[0].name, "Dr. Ahmad Mohammed");
    assert_eq!(view[4].name, "Ms. Zhyan Ibrahim");
}

#[test]
fn example_files_pass_their_own_validation() {
    let books = example_file(ExportKind::Books).unwrap();
    assert_eq!(books.file_name, "books-example.json");
    assert!(validate_books(&books.contents).is_valid);
    assert!(validate_teachers(&example_file(ExportKind::Teachers).unwrap().contents).is_valid);
    assert!(validate_speeches(&example_file(ExportKind::Speeches).unwrap().contents).is_valid);
}
