//! Demo records loaded when the panel starts with seeding enabled.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Utc> {
    let naive = date(y, m, d).and_hms_opt(hour, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&naive)
}

pub fn subjects() -> Vec<Subject> {
    [
        "Mathematics",
        "Physics",
        "Chemistry",
        "English",
        "Arabic",
        "Kurdish",
        "History",
        "Geography",
        "Biology",
        "Art",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| Subject { id: (i + 1).to_string(), name: name.to_string() })
    .collect()
}

pub fn teachers() -> Vec<Teacher> {
    let rows = [
        ("1", "Dr. Ahmad Mohammed", "1", "Mathematics", date(2024, 1, 10)),
        ("2", "Ms. Fatima Ali", "5", "Arabic", date(2024, 1, 12)),
        ("3", "Dr. Karwan Hassan", "2", "Physics", date(2024, 1, 15)),
        ("4", "Ms. Zhyan Ibrahim", "4", "English", date(2024, 1, 18)),
        ("5", "Dr. Sara Mahmoud", "3", "Chemistry", date(2024, 1, 20)),
    ];
    rows.into_iter()
        .map(|(id, name, subject_id, subject, date_added)| Teacher {
            id: id.into(),
            name: name.into(),
            subject: subject.into(),
            subject_id: subject_id.into(),
            date_added,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn book(
    n: u32,
    title: &str,
    url: &str,
    subject: &str,
    teacher: &str,
    grade: &str,
    book_type: &str,
    clicks: (i64, u64, u64),
    date_added: NaiveDate,
) -> Book {
    let (time_clicked, click_count, favorites_count) = clicks;
    Book {
        id: n.to_string(),
        book_id: format!("BOOK-{n:03}"),
        title: title.into(),
        url: url.into(),
        image: UNKNOWN.into(),
        subject_name: subject.into(),
        teacher_name: teacher.into(),
        grade: grade.into(),
        book_type: book_type.into(),
        time_clicked,
        click_count,
        favorites_count,
        date_added,
    }
}

/// Four of the five books name a seeded teacher; the fifth names one who is
/// not on the staff list.
pub fn books() -> Vec<Book> {
    vec![
        book(
            1,
            "Mathematics for Grade 12",
            "example.com/math-12.pdf",
            "Mathematics",
            "Dr. Ahmad Mohammed",
            "Grade 12",
            "book",
            (1_640_995_200_000, 245, 89),
            date(2024, 1, 15),
        ),
        book(
            2,
            "Modern Physics",
            "www.example.com/physics-modern.pdf",
            "Physics",
            "Dr. Karwan Hassan",
            "Grade 11",
            "booklet",
            (1_640_995_800_000, 189, 67),
            date(2024, 1, 20),
        ),
        book(
            3,
            "Organic Chemistry",
            "https://example.com/organic-chemistry.pdf",
            "Chemistry",
            "Dr. Sara Mahmoud",
            "Grade 10",
            "booklet",
            (1_640_996_400_000, 156, 45),
            date(2024, 2, 1),
        ),
        book(
            4,
            "English Grammar",
            "docs.google.com/document/english-grammar",
            "English",
            "Ms. Zhyan Ibrahim",
            "Grade 9",
            "book",
            (1_640_997_000_000, 298, 112),
            date(2024, 2, 5),
        ),
        book(
            5,
            "History of Kurdistan",
            "archive.org/details/kurdistan-history",
            "History",
            "Mr. Dler Qadir",
            "Grade 8",
            "book",
            (1_640_997_600_000, 134, 78),
            date(2024, 2, 10),
        ),
    ]
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".into(),
            title: "System update".into(),
            message: "The system will be updated on Friday at 5 PM.".into(),
            alert_type: AlertType::Info,
            priority: AlertPriority::Medium,
            target_audience: TargetAudience::All,
            category: AlertCategory::Maintenance,
            status: AlertStatus::Active,
            scheduled_date: None,
            expiry_date: None,
            created_at: at(2024, 7, 20, 10),
            updated_at: at(2024, 7, 20, 10),
            created_by: "admin".into(),
            is_sticky: false,
            show_on_login: false,
            show_on_dashboard: true,
            attachments: None,
        },
        Alert {
            id: "2".into(),
            title: "Emergency maintenance".into(),
            message: "Emergency maintenance on the main servers is under way.".into(),
            alert_type: AlertType::Error,
            priority: AlertPriority::Urgent,
            target_audience: TargetAudience::Staff,
            category: AlertCategory::Maintenance,
            status: AlertStatus::Active,
            scheduled_date: None,
            expiry_date: None,
            created_at: at(2024, 7, 25, 14),
            updated_at: at(2024, 7, 25, 14),
            created_by: "admin".into(),
            is_sticky: true,
            show_on_login: true,
            show_on_dashboard: true,
            attachments: None,
        },
    ]
}

pub fn speeches() -> Vec<Speech> {
    vec![
        Speech {
            id: "1".into(),
            title: "Welcome back".into(),
            content: "Welcome to the new term. Let us make it our best one yet.".into(),
            scheduled_date: date(2024, 1, 15),
            status: SpeechStatus::Published,
            created_at: at(2024, 1, 10, 9),
        },
        Speech {
            id: "2".into(),
            title: "Exam week".into(),
            content: "Exams start next week. Rest well and review your notes.".into(),
            scheduled_date: date(2024, 1, 22),
            status: SpeechStatus::Scheduled,
            created_at: at(2024, 1, 11, 9),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check_teacher_name;

    #[test]
    fn seeded_teachers_pass_name_rules() {
        for t in teachers() {
            assert!(check_teacher_name(&t.name).is_ok(), "{}", t.name);
        }
    }

    #[test]
    fn seeded_teacher_subjects_exist() {
        let subjects = subjects();
        for t in teachers() {
            let s = subjects.iter().find(|s| s.id == t.subject_id).unwrap();
            assert_eq!(s.name, t.subject);
        }
    }
}
