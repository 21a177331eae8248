use super::*;
use crate::course::{Course, CourseIcon, NewCourse};
use crate::memory::MemoryStore;
use futures::executor::block_on;
use serde_json::json;

#[test]
fn fetch_single_reports_not_found_for_zero_rows() {
    let store = MemoryStore::new();
    let query = Select::from_table(Table::Courses).eq("id", "nope");
    let err = block_on(fetch_single::<Course, _>(&store, &query)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn fetch_single_rejects_multiple_rows() {
    let store = MemoryStore::new();
    store.seed(Table::Courses, json!({ "title": "Same" }));
    store.seed(Table::Courses, json!({ "title": "Same" }));
    let query = Select::from_table(Table::Courses).eq("title", "Same");
    let err = block_on(fetch_single::<Course, _>(&store, &query)).unwrap_err();
    assert_eq!(err, StoreError::MultipleRows(2));
}

#[test]
fn fetch_single_decodes_one_row() {
    let store = MemoryStore::new();
    let id = store.seed(Table::Courses, json!({ "title": "CA Final", "icon": "Trophy" }));
    let query = Select::from_table(Table::Courses).eq("id", id.as_str());
    let course: Course = block_on(fetch_single(&store, &query)).unwrap();
    assert_eq!(course.id, id);
    assert_eq!(course.icon, CourseIcon::Trophy);
}

#[test]
fn fetch_rows_reports_decode_errors_with_table() {
    let store = MemoryStore::new();
    store.seed(Table::Courses, json!({ "description": "no title" }));
    let err = block_on(fetch_rows::<Course, _>(&store, &Select::from_table(Table::Courses))).unwrap_err();
    assert!(matches!(err, StoreError::Decode { table: Table::Courses, .. }));
}

#[test]
fn insert_record_serializes_payload() {
    let store = MemoryStore::new();
    let record = NewCourse { title: "Foundation".to_owned(), description: None, icon: CourseIcon::Users };
    let id = block_on(insert_record(&store, Table::Courses, &record)).unwrap();

    let rows = block_on(store.select(&Select::from_table(Table::Courses))).unwrap();
    assert_eq!(rows[0]["id"], json!(id));
    assert_eq!(rows[0]["icon"], json!("Users"));
    assert_eq!(rows[0]["description"], serde_json::Value::Null);
}

#[test]
fn service_error_displays_verbatim() {
    let err = StoreError::Service("duplicate key value violates unique constraint".to_owned());
    assert_eq!(err.to_string(), "duplicate key value violates unique constraint");
}
