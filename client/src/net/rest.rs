//! `TableStore` over the hosted backend's REST table API.
//!
//! Reads render `Select` as query pairs on `GET /rest/v1/<table>`; inserts
//! `POST` with `Prefer: return=representation` to learn the new id; deletes
//! filter on `id=eq.<id>`. Requests carry the anon key plus the session's
//! bearer token, so row-level policies see the signed-in user.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `StoreError::Service` with the backend's own
//! message so pages can surface it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use async_trait::async_trait;
use catalog::auth::SessionState;
use catalog::query::{Select, Table};
use catalog::store::{StoreError, TableStore};
use serde_json::Value;

/// Store bound to one session (or to anonymous access).
///
/// Constructing one is free; backend coordinates are resolved on first use,
/// so a flow that fails validation never touches the network.
#[derive(Clone, Debug, Default)]
pub struct RestStore {
    access_token: Option<String>,
}

impl RestStore {
    #[must_use]
    pub fn for_session(state: &SessionState) -> Self {
        Self { access_token: state.access_token().map(str::to_owned) }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn bearer(&self, anon_key: &str) -> String {
        format!("Bearer {}", self.access_token.as_deref().unwrap_or(anon_key))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_filter(id: &str) -> (&'static str, String) {
    ("id", format!("eq.{id}"))
}

/// Pull the new row's id out of an insert response (`[row]` or `row`).
#[cfg(any(test, feature = "hydrate"))]
fn inserted_id(body: &Value) -> Option<String> {
    let row = match body {
        Value::Array(rows) => rows.first()?,
        other => other,
    };
    match row.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, StoreError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Service(super::error_message(status, &body)))
}

#[async_trait(?Send)]
impl TableStore for RestStore {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let config = super::backend::backend_config().await?;
            let pairs = query.query_pairs();
            let resp = gloo_net::http::Request::get(&config.table_url(query.table))
                .query(pairs.iter().map(|(k, v)| (k.as_str(), v)))
                .header("apikey", &config.anon_key)
                .header("Authorization", &self.bearer(&config.anon_key))
                .send()
                .await
                .map_err(transport)?;
            let resp = ensure_ok(resp).await?;
            resp.json::<Vec<Value>>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(StoreError::Unavailable)
        }
    }

    async fn insert(&self, table: Table, record: Value) -> Result<String, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let config = super::backend::backend_config().await?;
            let resp = gloo_net::http::Request::post(&config.table_url(table))
                .header("apikey", &config.anon_key)
                .header("Authorization", &self.bearer(&config.anon_key))
                .header("Prefer", "return=representation")
                .json(&record)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let resp = ensure_ok(resp).await?;
            let body: Value = resp.json().await.map_err(transport)?;
            inserted_id(&body).ok_or_else(|| StoreError::Decode { table, message: "insert response has no id".to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (table, record);
            Err(StoreError::Unavailable)
        }
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let config = super::backend::backend_config().await?;
            let resp = gloo_net::http::Request::delete(&config.table_url(table))
                .query([delete_filter(id)])
                .header("apikey", &config.anon_key)
                .header("Authorization", &self.bearer(&config.anon_key))
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (table, id);
            Err(StoreError::Unavailable)
        }
    }
}
