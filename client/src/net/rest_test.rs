use super::*;
use catalog::auth::{AuthUser, Session};
use serde_json::json;

fn signed_in(token: &str) -> SessionState {
    SessionState::signed_in(Session {
        user: AuthUser { id: "u1".to_owned(), email: None, display_name: None },
        access_token: token.to_owned(),
        is_admin: false,
    })
}

#[test]
fn anonymous_store_uses_anon_key_as_bearer() {
    let store = RestStore::for_session(&SessionState::signed_out());
    assert_eq!(store.bearer("anon-key"), "Bearer anon-key");
}

#[test]
fn session_store_uses_access_token() {
    let store = RestStore::for_session(&signed_in("jwt-123"));
    assert_eq!(store.bearer("anon-key"), "Bearer jwt-123");
}

#[test]
fn delete_filter_targets_id() {
    assert_eq!(delete_filter("c-1"), ("id", "eq.c-1".to_owned()));
}

#[test]
fn inserted_id_reads_representation_array() {
    assert_eq!(inserted_id(&json!([{ "id": "new-id", "title": "x" }])), Some("new-id".to_owned()));
    assert_eq!(inserted_id(&json!({ "id": 42 })), Some("42".to_owned()));
    assert_eq!(inserted_id(&json!([])), None);
    assert_eq!(inserted_id(&json!([{ "title": "no id" }])), None);
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn store_is_unavailable_without_browser() {
    let store = RestStore::default();
    let result = futures::executor::block_on(store.select(&Select::from_table(Table::Courses)));
    assert_eq!(result, Err(StoreError::Unavailable));
}
