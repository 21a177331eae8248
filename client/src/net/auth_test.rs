use super::*;
use serde_json::json;

#[test]
fn session_from_token_reads_user_and_display_name() {
    let body = json!({
        "access_token": "jwt-abc",
        "token_type": "bearer",
        "user": {
            "id": "user-1",
            "email": "asha@example.com",
            "user_metadata": { "full_name": "Asha Rao" }
        }
    })
    .to_string();

    let session = session_from_token(&body).unwrap();
    assert_eq!(session.access_token, "jwt-abc");
    assert_eq!(session.user.id, "user-1");
    assert_eq!(session.user.email.as_deref(), Some("asha@example.com"));
    assert_eq!(session.user.display_name.as_deref(), Some("Asha Rao"));
    assert!(!session.is_admin);
}

#[test]
fn session_from_token_tolerates_missing_metadata() {
    let body = json!({ "access_token": "t", "user": { "id": "u" } }).to_string();
    let session = session_from_token(&body).unwrap();
    assert_eq!(session.user.email, None);
    assert_eq!(session.user.display_name, None);
}

#[test]
fn session_from_token_rejects_malformed_body() {
    let err = session_from_token("{\"user\":{}}").unwrap_err();
    assert!(matches!(err, AuthError::Provider(message) if message.starts_with("invalid token response")));
}

#[test]
fn sign_up_body_carries_full_name_metadata() {
    assert_eq!(
        sign_up_body("a@b.co", "secret1", "Asha"),
        json!({ "email": "a@b.co", "password": "secret1", "data": { "full_name": "Asha" } })
    );
    assert_eq!(sign_in_body("a@b.co", "secret1"), json!({ "email": "a@b.co", "password": "secret1" }));
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn provider_is_unavailable_without_browser() {
    let result = futures::executor::block_on(AuthClient.sign_in("a@b.co", "secret1"));
    assert_eq!(result, Err(AuthError::Unavailable));
}
