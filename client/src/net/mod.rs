//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` fetches the backend coordinates from our own server, `rest`
//! implements `catalog::TableStore` over the backend's table API and `auth`
//! implements `catalog::auth::AuthProvider` over its auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to an "unavailable" error since the
//! backend is only reached from the browser.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod auth;
pub mod backend;
pub mod rest;

/// Human-readable message from a backend error body.
///
/// The table API reports `message`; the auth API uses `error_description`,
/// `msg` or `error` depending on the endpoint. Falls back to the status.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|value| {
            ["message", "error_description", "msg", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        })
        .filter(|message| !message.is_empty())
        .map_or_else(|| format!("request failed: {status}"), str::to_owned)
}
