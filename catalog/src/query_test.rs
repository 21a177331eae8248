use super::*;
use serde_json::json;

fn pairs(select: &Select) -> Vec<(String, String)> {
    select.query_pairs()
}

fn expected(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn table_names_match_backend() {
    assert_eq!(Table::Courses.name(), "courses");
    assert_eq!(Table::TestSeries.name(), "test_series");
    assert_eq!(Table::UserRoles.name(), "user_roles");
    assert_eq!(Table::TestSeries.to_string(), "test_series");
}

#[test]
fn bare_select_projects_all_columns() {
    let select = Select::from_table(Table::Courses);
    assert_eq!(pairs(&select), expected(&[("select", "*")]));
}

#[test]
fn public_series_read_renders_filters_and_order() {
    let select = Select::from_table(Table::TestSeries)
        .eq("course_id", "c-1")
        .eq("is_active", true)
        .order_by_creation();
    assert_eq!(
        pairs(&select),
        expected(&[
            ("select", "*"),
            ("course_id", "eq.c-1"),
            ("is_active", "eq.true"),
            ("order", "created_at.asc"),
        ])
    );
}

#[test]
fn projection_joins_columns() {
    let select = Select::from_table(Table::Courses).columns(&["id", "title"]).eq("id", "c-9");
    assert_eq!(pairs(&select), expected(&[("select", "id,title"), ("id", "eq.c-9")]));
}

#[test]
fn null_filter_uses_is_operator() {
    let select = Select::from_table(Table::Courses).eq("icon", serde_json::Value::Null);
    assert_eq!(pairs(&select)[1], ("icon".to_owned(), "is.null".to_owned()));
}

#[test]
fn numeric_filter_renders_plain_number() {
    let select = Select::from_table(Table::TestSeries).eq("total_questions", 50);
    assert_eq!(pairs(&select)[1], ("total_questions".to_owned(), "eq.50".to_owned()));
}

#[test]
fn matches_requires_every_filter() {
    let select = Select::from_table(Table::TestSeries).eq("course_id", "c-1").eq("is_active", true);
    assert!(select.matches(&json!({ "course_id": "c-1", "is_active": true })));
    assert!(!select.matches(&json!({ "course_id": "c-1", "is_active": false })));
    assert!(!select.matches(&json!({ "course_id": "c-2", "is_active": true })));
    assert!(!select.matches(&json!({ "course_id": "c-1" })));
}

#[test]
fn matches_without_filters_accepts_any_row() {
    assert!(Select::from_table(Table::Courses).matches(&json!({ "id": "x" })));
}
