//! Shared course-catalog model and data-service contracts.
//!
//! This crate owns everything the exam portal knows about its two persisted
//! entities (courses and test series) and the hosted backend it delegates
//! storage and authentication to. It is used by both `client` and `server`.
//!
//! ARCHITECTURE
//! ============
//! - `course`, `test_series`: row types as returned by the backend, plus the
//!   insert payloads and the input coercion rules for admin forms.
//! - `query`, `store`: reads described as data (`Select`) and the async
//!   `TableStore` contract every backend implementation satisfies.
//! - `listing`, `admin`: the page-level flows (public reads, admin
//!   mutate-then-refresh) written against `TableStore` so they run the same
//!   in the browser and in tests.
//! - `auth`, `nav`, `routes`: session model, auth form rules, navigation.
//! - `memory`: an in-process `TableStore` used by tests (`test-util`).

pub mod admin;
pub mod auth;
pub mod config;
pub mod course;
pub mod listing;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod nav;
pub mod query;
pub mod routes;
pub mod store;
pub mod test_series;

pub use course::{Course, CourseIcon};
pub use query::{Select, Table};
pub use store::{StoreError, TableStore};
pub use test_series::TestSeries;
