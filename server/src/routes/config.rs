//! `GET /api/config`: backend coordinates for the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use axum::Json;
use axum::extract::State;
use catalog::config::BackendConfig;

use crate::state::AppState;

pub async fn backend_config(State(state): State<AppState>) -> Json<BackendConfig> {
    Json(state.config.backend.clone())
}
