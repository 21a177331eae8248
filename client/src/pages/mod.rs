//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped loading and form state and delegates
//! rendering details to `components`. Data flows through `catalog`
//! operations over a `RestStore` built from the current session.

pub mod admin;
pub mod auth;
pub mod home;
pub mod syllabus;
pub mod test_series;
