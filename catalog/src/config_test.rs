use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = BackendConfig::new("https://demo.example.co//", "anon");
    assert_eq!(config.url, "https://demo.example.co");
}

#[test]
fn table_url_uses_rest_root() {
    let config = BackendConfig::new("https://demo.example.co", "anon");
    assert_eq!(config.table_url(Table::TestSeries), "https://demo.example.co/rest/v1/test_series");
}

#[test]
fn auth_url_joins_path() {
    let config = BackendConfig::new("https://demo.example.co", "anon");
    assert_eq!(config.auth_url("signup"), "https://demo.example.co/auth/v1/signup");
    assert_eq!(config.auth_url("/logout"), "https://demo.example.co/auth/v1/logout");
}

#[test]
fn serializes_for_config_endpoint() {
    let config = BackendConfig::new("https://demo.example.co", "anon");
    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        serde_json::json!({ "url": "https://demo.example.co", "anon_key": "anon" })
    );
}
