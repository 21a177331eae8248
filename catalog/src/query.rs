//! Table reads described as plain data.
//!
//! A [`Select`] names a table, a column projection, equality filters and an
//! optional creation-time ordering. Backends either interpret it directly
//! (`memory::MemoryStore`) or render it to REST query pairs via
//! [`Select::query_pairs`].

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column every table carries; the backend assigns it on insert.
pub const CREATED_AT: &str = "created_at";

/// Tables exposed by the hosted backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Courses,
    TestSeries,
    /// Role grants keyed by auth user id; source of the admin flag.
    UserRoles,
}

impl Table {
    /// Backend table name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::TestSeries => "test_series",
            Self::UserRoles => "user_roles",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Equality filter on a named column.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

/// Row ordering. Only ascending creation time is supported by this app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    CreatedAsc,
}

/// A read against one table.
#[derive(Clone, Debug, PartialEq)]
pub struct Select {
    pub table: Table,
    /// Projected columns; empty means all columns.
    pub columns: Vec<String>,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
}

impl Select {
    #[must_use]
    pub fn from_table(table: Table) -> Self {
        Self { table, columns: Vec::new(), filters: Vec::new(), order: None }
    }

    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| (*c).to_owned()).collect();
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter { column: column.to_owned(), value: value.into() });
        self
    }

    #[must_use]
    pub fn order_by_creation(mut self) -> Self {
        self.order = Some(Order::CreatedAsc);
        self
    }

    /// Whether `row` passes every equality filter.
    #[must_use]
    pub fn matches(&self, row: &Value) -> bool {
        self.filters
            .iter()
            .all(|f| row.get(&f.column).unwrap_or(&Value::Null) == &f.value)
    }

    /// Render as REST query pairs (`select`, `<col>=eq.<v>`, `order`).
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let select = if self.columns.is_empty() { "*".to_owned() } else { self.columns.join(",") };
        let mut pairs = vec![("select".to_owned(), select)];
        for filter in &self.filters {
            pairs.push((filter.column.clone(), filter_operand(&filter.value)));
        }
        if let Some(Order::CreatedAsc) = self.order {
            pairs.push(("order".to_owned(), format!("{CREATED_AT}.asc")));
        }
        pairs
    }
}

fn filter_operand(value: &Value) -> String {
    match value {
        Value::Null => "is.null".to_owned(),
        Value::String(s) => format!("eq.{s}"),
        other => format!("eq.{other}"),
    }
}
