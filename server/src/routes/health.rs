//! Liveness and backend reachability probes.
//!
//! `/healthz` only says the process is serving. `/healthz/backend` calls the
//! hosted auth API's health endpoint with the anon key and reports 503 when
//! it is unreachable or unhealthy.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn backend_health(State(state): State<AppState>) -> (StatusCode, Json<BackendHealth>) {
    match probe(&state).await {
        Ok(()) => (StatusCode::OK, Json(BackendHealth { status: "ok".to_owned(), error: None })),
        Err(error) => {
            tracing::warn!(%error, "backend health probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(BackendHealth { status: "unavailable".to_owned(), error: Some(error) }))
        }
    }
}

async fn probe(state: &AppState) -> Result<(), String> {
    let backend = &state.config.backend;
    let resp = state
        .http
        .get(backend.auth_url("health"))
        .header("apikey", &backend.anon_key)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(format!("backend responded {}", status.as_u16()))
    }
}
