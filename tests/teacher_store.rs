use school_admin::catalog::SubjectCatalog;
use school_admin::models::TeacherInput;
use school_admin::repo::{RepoError, TeacherRepo, TeacherStore};
use school_admin::seed;

fn store() -> TeacherStore {
    TeacherStore::with_teachers(SubjectCatalog::new(seed::subjects()), seed::teachers())
}

fn input(name: &str, subject_id: &str) -> TeacherInput {
    TeacherInput { name: name.into(), subject_id: subject_id.into() }
}

#[test]
fn add_resolves_subject_name() {
    let store = store();
    let teacher = store.add_teacher(input("Mr. Aso Rashid", "7")).unwrap();

    assert_eq!(teacher.subject, "History");
    assert_eq!(teacher.subject_id, "7");
    assert_eq!(store.get_teacher(&teacher.id), Some(teacher));
}

#[test]
fn add_with_unknown_subject_fails_and_stores_nothing() {
    let store = store();
    let err = store.add_teacher(input("Mr. Aso Rashid", "99")).unwrap_err();

    assert_eq!(err, RepoError::SubjectNotFound("99".into()));
    assert_eq!(store.list_teachers().len(), 5);
}

#[test]
fn update_re_resolves_subject() {
    let store = store();
    let updated = store.update_teacher("2", input("Ms. Fatima Ali", "9")).unwrap().unwrap();

    assert_eq!(updated.subject, "Biology");
    assert_eq!(store.get_teacher("2").unwrap().subject_id, "9");
}

#[test]
fn update_unknown_subject_leaves_teacher_unchanged() {
    let store = store();
    let before = store.get_teacher("2").unwrap();

    let err = store.update_teacher("2", input("Ms. Renamed", "42")).unwrap_err();

    assert!(matches!(err, RepoError::SubjectNotFound(_)));
    assert_eq!(store.get_teacher("2").unwrap(), before);
}

#[test]
fn update_missing_teacher_is_none() {
    let store = store();
    assert_eq!(store.update_teacher("missing", input("Mr. Nobody", "1")), Ok(None));
}

#[test]
fn filter_by_subject_and_delete() {
    let store = store();
    let physics = store.list_teachers_by_subject("2");
    assert_eq!(physics.len(), 1);
    assert_eq!(physics[0].name, "Dr. Karwan Hassan");

    assert!(store.delete_teacher("3"));
    assert!(!store.delete_teacher("3"));
    assert!(store.list_teachers_by_subject("2").is_empty());
}
