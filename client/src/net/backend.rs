//! Backend coordinates, fetched once from our server's `/api/config`.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use catalog::config::BackendConfig;
use catalog::store::StoreError;

pub const CONFIG_ENDPOINT: &str = "/api/config";

#[cfg(feature = "hydrate")]
thread_local! {
    static CACHED: std::cell::RefCell<Option<BackendConfig>> = const { std::cell::RefCell::new(None) };
}

#[cfg(any(test, feature = "hydrate"))]
fn config_failed_message(status: u16) -> String {
    format!("backend config request failed: {status}")
}

/// Resolve the backend coordinates, caching them for the page lifetime.
///
/// # Errors
///
/// Transport or status errors from `/api/config`; `Unavailable` outside the browser.
pub async fn backend_config() -> Result<BackendConfig, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(config) = CACHED.with(|cached| cached.borrow().clone()) {
            return Ok(config);
        }
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(StoreError::Service(config_failed_message(resp.status())));
        }
        let config: BackendConfig = resp.json().await.map_err(|e| StoreError::Transport(e.to_string()))?;
        CACHED.with(|cached| *cached.borrow_mut() = Some(config.clone()));
        Ok(config)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(StoreError::Unavailable)
    }
}
