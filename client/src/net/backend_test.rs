use super::*;

#[test]
fn config_failed_message_formats_status() {
    assert_eq!(config_failed_message(503), "backend config request failed: 503");
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn backend_config_is_unavailable_without_browser() {
    let result = futures::executor::block_on(backend_config());
    assert_eq!(result, Err(StoreError::Unavailable));
}
