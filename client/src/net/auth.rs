//! `AuthProvider` over the hosted auth API.
//!
//! Password grant at `/auth/v1/token?grant_type=password`, registration at
//! `/auth/v1/signup` with the display name in `data.full_name`, and
//! `/auth/v1/logout` for sign-out. The returned session has `is_admin`
//! unset; `state::session::establish` resolves it from `user_roles`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use async_trait::async_trait;
use catalog::auth::{AuthError, AuthProvider, Session};
#[cfg(any(test, feature = "hydrate"))]
use catalog::auth::AuthUser;
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
#[cfg(any(test, feature = "hydrate"))]
use serde_json::Value;

#[derive(Clone, Copy, Debug, Default)]
pub struct AuthClient;

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Value,
}

/// Build a session from a password-grant response body.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_token(body: &str) -> Result<Session, AuthError> {
    let token: TokenResponse =
        serde_json::from_str(body).map_err(|e| AuthError::Provider(format!("invalid token response: {e}")))?;
    let display_name = token
        .user
        .user_metadata
        .get("full_name")
        .and_then(Value::as_str)
        .map(str::to_owned);
    Ok(Session {
        user: AuthUser { id: token.user.id, email: token.user.email, display_name },
        access_token: token.access_token,
        is_admin: false,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_body(email: &str, password: &str) -> Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_body(email: &str, password: &str, display_name: &str) -> Value {
    serde_json::json!({
        "email": email,
        "password": password,
        "data": { "full_name": display_name },
    })
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> AuthError {
    AuthError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn config() -> Result<catalog::config::BackendConfig, AuthError> {
    super::backend::backend_config().await.map_err(|e| match e {
        catalog::StoreError::Transport(message) => AuthError::Transport(message),
        catalog::StoreError::Unavailable => AuthError::Unavailable,
        other => AuthError::Provider(other.to_string()),
    })
}

#[cfg(feature = "hydrate")]
async fn post_json(url: &str, anon_key: &str, bearer: &str, body: &Value) -> Result<String, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .header("apikey", anon_key)
        .header("Authorization", &format!("Bearer {bearer}"))
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let (ok, status) = (resp.ok(), resp.status());
    let text = resp.text().await.map_err(transport)?;
    if !ok {
        return Err(AuthError::Provider(super::error_message(status, &text)));
    }
    Ok(text)
}

#[async_trait(?Send)]
impl AuthProvider for AuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let config = config().await?;
            let url = config.auth_url("token?grant_type=password");
            let body = post_json(&url, &config.anon_key, &config.anon_key, &sign_in_body(email, password)).await?;
            session_from_token(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let config = config().await?;
            let body = sign_up_body(email, password, display_name);
            post_json(&config.auth_url("signup"), &config.anon_key, &config.anon_key, &body).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, display_name);
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_out(&self, session: &Session) {
        #[cfg(feature = "hydrate")]
        {
            let Ok(config) = config().await else { return };
            let url = config.auth_url("logout");
            if let Err(e) = post_json(&url, &config.anon_key, &session.access_token, &Value::Null).await {
                log::warn!("sign-out request failed: {e}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    }
}
