//! Search and sort over snapshots of books, teachers and speeches, as shown in
//! the data list views and written out by the JSON export.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{Book, Speech, Teacher};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Turn an ascending comparison into one for this order.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookSortKey {
    Title,
    Subject,
    Teacher,
    Grade,
    ClickCount,
    #[default]
    DateAdded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeacherSortKey {
    Name,
    Subject,
    #[default]
    DateAdded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpeechSortKey {
    Title,
    ScheduledDate,
    Status,
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery<K> {
    pub search: String,
    pub sort_by: K,
    pub order: SortOrder,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

pub fn book_view(books: &[Book], query: &ListQuery<BookSortKey>) -> Vec<Book> {
    let needle = query.search.to_lowercase();
    let mut view: Vec<Book> = books
        .iter()
        .filter(|b| {
            contains_ci(&b.title, &needle)
                || contains_ci(&b.subject_name, &needle)
                || contains_ci(&b.teacher_name, &needle)
                || contains_ci(&b.grade, &needle)
        })
        .cloned()
        .collect();
    view.sort_by(|a, b| {
        let ord = match query.sort_by {
            BookSortKey::Title => a.title.cmp(&b.title),
            BookSortKey::Subject => a.subject_name.cmp(&b.subject_name),
            BookSortKey::Teacher => a.teacher_name.cmp(&b.teacher_name),
            BookSortKey::Grade => a.grade.cmp(&b.grade),
            BookSortKey::ClickCount => a.click_count.cmp(&b.click_count),
            BookSortKey::DateAdded => a.date_added.cmp(&b.date_added),
        };
        query.order.apply(ord)
    });
    view
}

pub fn teacher_view(teachers: &[Teacher], query: &ListQuery<TeacherSortKey>) -> Vec<Teacher> {
    let needle = query.search.to_lowercase();
    let mut view: Vec<Teacher> = teachers
        .iter()
        .filter(|t| contains_ci(&t.name, &needle) || contains_ci(&t.subject, &needle))
        .cloned()
        .collect();
    view.sort_by(|a, b| {
        let ord = match query.sort_by {
            TeacherSortKey::Name => a.name.cmp(&b.name),
            TeacherSortKey::Subject => a.subject.cmp(&b.subject),
            TeacherSortKey::DateAdded => a.date_added.cmp(&b.date_added),
        };
        query.order.apply(ord)
    });
    view
}

pub fn speech_view(speeches: &[Speech], query: &ListQuery<SpeechSortKey>) -> Vec<Speech> {
    let needle = query.search.to_lowercase();
    let mut view: Vec<Speech> = speeches
        .iter()
        .filter(|s| {
            contains_ci(&s.title, &needle)
                || contains_ci(&s.content, &needle)
                || s.scheduled_date.to_string().contains(query.search.as_str())
        })
        .cloned()
        .collect();
    view.sort_by(|a, b| {
        let ord = match query.sort_by {
            SpeechSortKey::Title => a.title.cmp(&b.title),
            SpeechSortKey::ScheduledDate => a.scheduled_date.cmp(&b.scheduled_date),
            SpeechSortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SpeechSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        query.order.apply(ord)
    });
    view
}
