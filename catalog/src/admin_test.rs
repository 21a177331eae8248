use super::*;
use crate::listing;
use crate::memory::MemoryStore;
use futures::executor::block_on;
use serde_json::json;

fn course_form(title: &str, icon: CourseIcon) -> CourseForm {
    CourseForm { title: title.to_owned(), description: String::new(), icon }
}

fn series_form(title: &str, duration: &str, questions: &str) -> TestSeriesForm {
    TestSeriesForm {
        title: title.to_owned(),
        duration: duration.to_owned(),
        questions: questions.to_owned(),
        ..TestSeriesForm::default()
    }
}

fn refreshed<T, E: std::fmt::Debug>(result: Result<Refreshed<T>, E>) -> AdminSnapshot {
    result.unwrap().snapshot.unwrap()
}

// =============================================================================
// validation
// =============================================================================

#[test]
fn blank_course_title_issues_no_store_calls() {
    let store = MemoryStore::new();
    for title in ["", "   ", "\t\n"] {
        let err = block_on(add_course(&store, &course_form(title, CourseIcon::Trophy), || ())).unwrap_err();
        assert_eq!(err, AdminError::Validation(ValidationError::MissingCourseTitle));
        assert_eq!(err.to_string(), "Enter course title");
    }
    assert_eq!(store.calls(), 0);
}

#[test]
fn series_without_course_issues_no_store_calls() {
    let store = MemoryStore::new();
    let form = series_form("Mock Test 1", "90", "50");
    for selected in [None, Some("")] {
        let err = block_on(add_test_series(&store, &form, selected, || ())).unwrap_err();
        assert_eq!(err.to_string(), "Select a course");
    }
    assert_eq!(store.calls(), 0);
}

#[test]
fn series_course_is_checked_before_title() {
    let form = series_form("  ", "60", "0");
    assert_eq!(form.validate(None), Err(ValidationError::MissingCourse));
    assert_eq!(form.validate(Some("c1")), Err(ValidationError::MissingSeriesTitle));
}

#[test]
fn series_validation_coerces_numbers() {
    let bad = series_form("T", "abc", "abc").validate(Some("c1")).unwrap();
    assert_eq!((bad.duration_minutes, bad.total_questions), (60, 0));
    let empty = series_form("T", "", "").validate(Some("c1")).unwrap();
    assert_eq!((empty.duration_minutes, empty.total_questions), (60, 0));
    let good = series_form("T", "45", "20").validate(Some("c1")).unwrap();
    assert_eq!((good.duration_minutes, good.total_questions), (45, 20));
    let fractional = series_form("T", "90.5", "50.0").validate(Some("c1")).unwrap();
    assert_eq!((fractional.duration_minutes, fractional.total_questions), (90, 50));
}

#[test]
fn empty_description_is_stored_as_null() {
    let record = course_form("CA Final", CourseIcon::Trophy).validate().unwrap();
    assert_eq!(record.description, None);
    let mut form = course_form("CA Final", CourseIcon::Trophy);
    form.description = "Final level".to_owned();
    assert_eq!(form.validate().unwrap().description.as_deref(), Some("Final level"));
}

#[test]
fn clearing_forms_resets_text_fields() {
    let mut course = course_form("CA Final", CourseIcon::Trophy);
    course.description = "x".to_owned();
    course.clear();
    assert_eq!(course, CourseForm { icon: CourseIcon::Trophy, ..CourseForm::default() });

    let mut series = series_form("Mock", "90", "50");
    series.is_active = false;
    series.clear();
    assert_eq!(series, TestSeriesForm::default());
    assert_eq!(series.duration, "60");
    assert_eq!(series.questions, "0");
    assert!(series.is_active);
}

// =============================================================================
// mutate-then-refresh
// =============================================================================

#[test]
fn adding_course_refreshes_list() {
    let store = MemoryStore::new();
    let snapshot = refreshed(block_on(add_course(&store, &course_form("Foundation", CourseIcon::BookOpen), || ())));
    assert_eq!(snapshot.courses.len(), 1);
    assert_eq!(snapshot.courses[0].title, "Foundation");
    // insert + two refresh reads
    assert_eq!(store.calls(), 3);

    let id = snapshot.courses[0].id.clone();
    let snapshot = refreshed(block_on(delete_course(&store, &id, || ())));
    assert!(snapshot.courses.iter().all(|c| c.title != "Foundation"));
}

#[test]
fn failed_insert_surfaces_service_message() {
    let store = MemoryStore::new();
    store.fail_next("new row violates row-level security policy for table \"courses\"");
    let err = block_on(add_course(&store, &course_form("CA Final", CourseIcon::Trophy), || ())).unwrap_err();
    assert_eq!(err.to_string(), "new row violates row-level security policy for table \"courses\"");
    assert!(block_on(listing::load_courses(&store)).unwrap().is_empty());
}

#[test]
fn failed_delete_keeps_row() {
    let store = MemoryStore::new();
    let id = store.seed(Table::Courses, json!({ "title": "CA Final" }));
    store.fail_next("permission denied");
    assert_eq!(
        block_on(delete_course(&store, &id, || ())).unwrap_err(),
        StoreError::Service("permission denied".to_owned())
    );
    assert_eq!(block_on(fetch_snapshot(&store)).unwrap().courses.len(), 1);
}

#[test]
fn deleting_course_leaves_its_series() {
    let store = MemoryStore::new();
    let course = store.seed(Table::Courses, json!({ "title": "CA Final" }));
    store.seed(Table::TestSeries, json!({ "course_id": course, "title": "Mock", "is_active": true }));

    let snapshot = refreshed(block_on(delete_course(&store, &course, || ())));
    assert!(snapshot.courses.is_empty());
    assert_eq!(snapshot.test_series.len(), 1);
}

#[test]
fn added_series_appears_publicly_until_deactivated() {
    let store = MemoryStore::new();
    let snapshot = refreshed(block_on(add_course(&store, &course_form("CA Final", CourseIcon::Trophy), || ())));
    let course_id = snapshot.courses[0].id.clone();

    let form = series_form("Mock Test 1", "90", "50");
    let snapshot = refreshed(block_on(add_test_series(&store, &form, Some(course_id.as_str()), || ())));
    let series = &snapshot.test_series[0];
    assert_eq!((series.duration_minutes, series.total_questions, series.is_active), (90, 50, true));

    let public = block_on(listing::load_test_series(&store, &course_id)).unwrap();
    assert_eq!(public.series.len(), 1);
    assert_eq!(public.series[0].duration_label(), "90 min");
    assert_eq!(public.series[0].questions_label(), "50 questions");

    store.set_field(Table::TestSeries, &series.id, "is_active", json!(false));
    let public = block_on(listing::load_test_series(&store, &course_id)).unwrap();
    assert!(public.series.is_empty());
    let admin = block_on(fetch_snapshot(&store)).unwrap();
    assert_eq!(admin.series_for(Some(course_id.as_str())).len(), 1);
}

#[test]
fn deleting_series_refreshes_list() {
    let store = MemoryStore::new();
    let id = store.seed(Table::TestSeries, json!({ "course_id": "c1", "title": "Mock" }));
    let snapshot = refreshed(block_on(delete_test_series(&store, &id, || ())));
    assert!(snapshot.test_series.is_empty());
}

#[test]
fn snapshot_filter_follows_selection() {
    let store = MemoryStore::new();
    store.seed(Table::TestSeries, json!({ "course_id": "a", "title": "A1", "is_active": true }));
    store.seed(Table::TestSeries, json!({ "course_id": "b", "title": "B1", "is_active": false }));
    let snapshot = block_on(fetch_snapshot(&store)).unwrap();
    assert_eq!(snapshot.series_for(None).len(), 2);
    let titles: Vec<_> = snapshot.series_for(Some("b")).iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["B1"]);
}

#[test]
fn selection_is_dropped_once_course_is_deleted() {
    let store = MemoryStore::new();
    let keep = store.seed(Table::Courses, json!({ "title": "CA Final" }));
    let gone = store.seed(Table::Courses, json!({ "title": "CA Inter" }));

    let snapshot = refreshed(block_on(delete_course(&store, &gone, || ())));
    assert_eq!(snapshot.retained_selection(Some(gone.as_str())), None);
    assert_eq!(snapshot.retained_selection(Some(keep.as_str())), Some(keep.clone()));
    assert_eq!(snapshot.retained_selection(None), None);
}

#[test]
fn failed_refresh_does_not_undo_successful_insert() {
    let store = MemoryStore::new();
    let form = course_form("Foundation", CourseIcon::BookOpen);
    let done = block_on(add_course(&store, &form, || store.fail_next("refresh failed"))).unwrap();
    assert_eq!(done.snapshot, Err(StoreError::Service("refresh failed".to_owned())));

    let courses = block_on(listing::load_courses(&store)).unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Foundation");
}

#[test]
fn failed_refresh_does_not_undo_successful_delete() {
    let store = MemoryStore::new();
    let id = store.seed(Table::TestSeries, json!({ "course_id": "c1", "title": "Mock" }));
    let done = block_on(delete_test_series(&store, &id, || store.fail_next("refresh failed"))).unwrap();
    assert!(done.snapshot.is_err());
    assert!(block_on(fetch_snapshot(&store)).unwrap().test_series.is_empty());
}

#[test]
fn refresh_ticket_is_taken_after_the_write() {
    let store = MemoryStore::new();
    let form = course_form("Foundation", CourseIcon::BookOpen);
    let done = block_on(add_course(&store, &form, || store.calls())).unwrap();
    // the insert has run, neither refresh read has
    assert_eq!(done.ticket, 1);
    assert_eq!(store.calls(), 3);
}

#[test]
fn rejected_write_never_takes_a_ticket() {
    let store = MemoryStore::new();
    store.fail_next("permission denied");
    let mut taken = false;
    let result = block_on(delete_course(&store, "c1", || taken = true));
    assert!(result.is_err());
    assert!(!taken);
}

#[test]
fn mutation_messages() {
    assert_eq!(Mutation::AddCourse.success_message(), "Course added!");
    assert_eq!(Mutation::DeleteCourse.success_message(), "Course deleted!");
    assert_eq!(Mutation::AddTestSeries.success_message(), "Test series added!");
    assert_eq!(Mutation::DeleteTestSeries.success_message(), "Test series deleted!");
}
