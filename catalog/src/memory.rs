//! In-process [`TableStore`] with the hosted backend's observable semantics.
//!
//! Rows are JSON objects. Inserts get a UUID `id` and a monotonically
//! increasing `created_at`, so creation ordering is stable. Every call is
//! counted, and a one-shot failure can be armed to exercise error paths.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::query::{CREATED_AT, Order, Select, Table};
use crate::store::{StoreError, TableStore};

#[derive(Default)]
pub struct MemoryStore {
    tables: RefCell<HashMap<Table, Vec<Value>>>,
    clock: Cell<u64>,
    calls: Cell<usize>,
    fail_next: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of select/insert/delete calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Make the next call fail with `StoreError::Service(message)`.
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.borrow_mut() = Some(message.to_owned());
    }

    /// Insert a row directly, bypassing call counting. Returns its id.
    pub fn seed(&self, table: Table, record: Value) -> String {
        self.put(table, record)
    }

    /// Overwrite `column` on the row with `id`, as an out-of-band edit would.
    pub fn set_field(&self, table: Table, id: &str, column: &str, value: Value) {
        let mut tables = self.tables.borrow_mut();
        if let Some(row) = tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|row| row.get("id").and_then(Value::as_str) == Some(id)))
        {
            row[column] = value;
        }
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_next.borrow_mut().take() {
            Some(message) => Err(StoreError::Service(message)),
            None => Ok(()),
        }
    }

    fn put(&self, table: Table, record: Value) -> String {
        let mut row = match record {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let id = Uuid::new_v4().to_string();
        let tick = self.clock.get() + 1;
        self.clock.set(tick);
        row.insert("id".to_owned(), Value::String(id.clone()));
        row.insert(CREATED_AT.to_owned(), Value::from(tick));
        self.tables.borrow_mut().entry(table).or_default().push(Value::Object(row));
        id
    }
}

#[async_trait(?Send)]
impl TableStore for MemoryStore {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError> {
        self.begin()?;
        let tables = self.tables.borrow();
        let mut rows: Vec<Value> = tables
            .get(&query.table)
            .map(|rows| rows.iter().filter(|row| query.matches(row)).cloned().collect())
            .unwrap_or_default();
        if let Some(Order::CreatedAsc) = query.order {
            rows.sort_by_key(|row| row.get(CREATED_AT).and_then(Value::as_u64).unwrap_or(0));
        }
        if !query.columns.is_empty() {
            rows = rows.into_iter().map(|row| project(&row, &query.columns)).collect();
        }
        Ok(rows)
    }

    async fn insert(&self, table: Table, record: Value) -> Result<String, StoreError> {
        self.begin()?;
        Ok(self.put(table, record))
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError> {
        self.begin()?;
        if let Some(rows) = self.tables.borrow_mut().get_mut(&table) {
            rows.retain(|row| row.get("id").and_then(Value::as_str) != Some(id));
        }
        Ok(())
    }
}

fn project(row: &Value, columns: &[String]) -> Value {
    let mut out = Map::new();
    for column in columns {
        if let Some(value) = row.get(column) {
            out.insert(column.clone(), value.clone());
        }
    }
    Value::Object(out)
}
