//! Public coordinates of the hosted backend.
//!
//! The server reads these from its environment and publishes them at
//! `/api/config`; the browser uses them to reach the backend directly. The
//! anon key is a publishable key, row-level policies do the gating.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::query::Table;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL without trailing slash.
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    #[must_use]
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() }
    }

    #[must_use]
    pub fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.url, table.name())
    }

    /// `path` is relative to the auth API root, e.g. `"signup"`.
    #[must_use]
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}
