use chrono::NaiveDate;
use school_admin::listing::{speech_view, ListQuery, SortOrder, SpeechSortKey};
use school_admin::models::{SpeechInput, SpeechStatus};
use school_admin::repo::{RepoError, SpeechRepo, SpeechStore};
use school_admin::seed;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn input(title: &str, date: NaiveDate) -> SpeechInput {
    SpeechInput {
        title: title.into(),
        content: "Good morning, everyone.".into(),
        scheduled_date: date,
        status: SpeechStatus::default(),
    }
}

#[test]
fn add_defaults_to_scheduled_and_finds_by_date() {
    let store = SpeechStore::new();
    let speech = store.add_speech(input("Spring", day(1))).unwrap();

    assert_eq!(speech.status, SpeechStatus::Scheduled);
    assert_eq!(store.find_speech_by_date(day(1)), Some(speech.clone()));
    assert_eq!(store.get_speech(&speech.id), Some(speech));
    assert!(store.find_speech_by_date(day(2)).is_none());
}

#[test]
fn one_speech_per_date() {
    let store = SpeechStore::new();
    store.add_speech(input("First", day(4))).unwrap();
    let second = store.add_speech(input("Second", day(5))).unwrap();

    assert_eq!(
        store.add_speech(input("Clash", day(4))),
        Err(RepoError::DuplicateSpeechDate(day(4)))
    );
    assert_eq!(
        store.update_speech(&second.id, input("Moved", day(4))),
        Err(RepoError::DuplicateSpeechDate(day(4)))
    );
    // keeping its own date is not a clash
    let kept = store.update_speech(&second.id, input("Renamed", day(5))).unwrap().unwrap();
    assert_eq!(kept.title, "Renamed");
    assert_eq!(store.list_speeches().len(), 2);
}

#[test]
fn blank_fields_are_rejected() {
    let store = SpeechStore::new();
    let mut bad = input("  ", day(9));
    bad.content.clear();
    match store.add_speech(bad) {
        Err(RepoError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn delete_and_missing_ids() {
    let store = SpeechStore::with_speeches(seed::speeches());
    assert!(store.update_speech("missing", input("X", day(20))).unwrap().is_none());
    assert!(store.delete_speech("1"));
    assert!(!store.delete_speech("1"));
    assert_eq!(store.list_speeches().len(), 1);
}

#[test]
fn seeding_drops_duplicate_dates() {
    let mut speeches = seed::speeches();
    let mut dup = speeches[0].clone();
    dup.id = "3".into();
    speeches.push(dup);
    assert_eq!(SpeechStore::with_speeches(speeches).list_speeches().len(), 2);
}

#[test]
fn view_searches_content_and_sorts_by_date() {
    let store = SpeechStore::with_speeches(seed::speeches());
    let query = ListQuery {
        search: String::new(),
        sort_by: SpeechSortKey::ScheduledDate,
        order: SortOrder::Asc,
    };
    let all = speech_view(&store.list_speeches(), &query);
    assert_eq!(all[0].id, "1");

    let query = ListQuery { search: "EXAMS".into(), ..query };
    let hits = speech_view(&store.list_speeches(), &query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Exam week");
}
