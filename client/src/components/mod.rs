//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome and read the session handle from
//! Leptos context.

pub mod guarded;
pub mod nav_bar;
pub mod page_shell;
