//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render from props or from the session
//! and notice contexts, and leave data loading to `pages`.

pub mod course_card;
pub mod icon;
pub mod navbar;
pub mod toasts;
