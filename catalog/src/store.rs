//! Data-service contract shared by every backend implementation.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures keep the service's own message (`StoreError::Service`)
//! so pages can surface it verbatim. A single-row read that matches nothing
//! is `StoreError::NotFound`, which callers treat as absence rather than a
//! failure.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::query::{Select, Table};

/// Error returned by [`TableStore`] operations and the typed helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected the request; carries its message unchanged.
    #[error("{0}")]
    Service(String),
    /// A single-row read matched zero rows.
    #[error("no matching row")]
    NotFound,
    /// A single-row read matched more than one row.
    #[error("expected a single row, found {0}")]
    MultipleRows(usize),
    /// A row did not have the expected shape.
    #[error("failed to decode {table} row: {message}")]
    Decode { table: Table, message: String },
    /// The request never produced a backend response.
    #[error("network error: {0}")]
    Transport(String),
    /// No backend is reachable from this environment (e.g. during SSR).
    #[error("data service unavailable")]
    Unavailable,
}

impl StoreError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Hosted table storage: filterable select, insert and delete-by-id.
///
/// Futures are not `Send`; browser fetches are bound to the UI thread.
#[async_trait(?Send)]
pub trait TableStore {
    /// Run `query`, returning matching rows as JSON objects.
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError>;

    /// Insert `record`; the backend assigns `id` and `created_at`.
    /// Returns the new row's id.
    async fn insert(&self, table: Table, record: Value) -> Result<String, StoreError>;

    /// Delete the row with primary key `id`.
    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError>;
}

/// Run `query` and decode every row as `T`.
///
/// # Errors
///
/// Propagates store errors and returns [`StoreError::Decode`] for malformed rows.
pub async fn fetch_rows<T, S>(store: &S, query: &Select) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: TableStore + ?Sized,
{
    let rows = store.select(query).await?;
    rows.into_iter().map(|row| decode(query.table, row)).collect()
}

/// Run `query` in single-row mode.
///
/// # Errors
///
/// [`StoreError::NotFound`] for zero rows, [`StoreError::MultipleRows`] for
/// more than one, plus any store or decode error.
pub async fn fetch_single<T, S>(store: &S, query: &Select) -> Result<T, StoreError>
where
    T: DeserializeOwned,
    S: TableStore + ?Sized,
{
    let mut rows = store.select(query).await?;
    match rows.len() {
        0 => Err(StoreError::NotFound),
        1 => decode(query.table, rows.remove(0)),
        n => Err(StoreError::MultipleRows(n)),
    }
}

/// Serialize `record` and insert it into `table`.
///
/// # Errors
///
/// Propagates store errors; serialization failures map to [`StoreError::Decode`].
pub async fn insert_record<R, S>(store: &S, table: Table, record: &R) -> Result<String, StoreError>
where
    R: Serialize,
    S: TableStore + ?Sized,
{
    let value = serde_json::to_value(record).map_err(|e| StoreError::Decode { table, message: e.to_string() })?;
    store.insert(table, value).await
}

fn decode<T: DeserializeOwned>(table: Table, row: Value) -> Result<T, StoreError> {
    serde_json::from_value(row).map_err(|e| StoreError::Decode { table, message: e.to_string() })
}
