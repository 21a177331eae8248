//! Server configuration parsed from environment variables.
//!
//! Required:
//! - `PORTAL_BACKEND_URL`: hosted backend base URL
//! - `PORTAL_ANON_KEY`: publishable anon key for that backend
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `PORTAL_HEALTH_TIMEOUT_SECS`: backend probe timeout, default 5

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use catalog::config::BackendConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} required")]
    Missing { var: &'static str },
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend: BackendConfig,
    pub health_timeout: Duration,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// A required variable is missing or `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// A required variable is missing or `PORT` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = required(&lookup, "PORTAL_BACKEND_URL")?;
        let anon_key = required(&lookup, "PORTAL_ANON_KEY")?;
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
        };
        let health_timeout_secs = lookup("PORTAL_HEALTH_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_HEALTH_TIMEOUT_SECS);

        Ok(Self {
            port,
            backend: BackendConfig::new(&url, &anon_key),
            health_timeout: Duration::from_secs(health_timeout_secs),
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    lookup(var)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { var })
}
