//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Both models are provided as `RwSignal`s from `app::App`; pages read them
//! with `expect_context` and pass the session on explicitly to the stores.

pub mod notice;
pub mod session;
