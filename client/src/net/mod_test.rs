use super::*;

#[test]
fn error_message_prefers_table_api_message() {
    let body = r#"{"code":"42501","message":"permission denied for table courses","details":null}"#;
    assert_eq!(error_message(403, body), "permission denied for table courses");
}

#[test]
fn error_message_reads_auth_api_fields() {
    assert_eq!(
        error_message(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
        "Invalid login credentials"
    );
    assert_eq!(error_message(422, r#"{"code":422,"msg":"User already registered"}"#), "User already registered");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "request failed: 502");
    assert_eq!(error_message(500, r#"{"message":""}"#), "request failed: 500");
}
