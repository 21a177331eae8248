//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed configuration and one pooled HTTP client for backend
//! probes; course data itself never passes through this server.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// The HTTP client could not be built (TLS backend initialization).
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.health_timeout).build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
