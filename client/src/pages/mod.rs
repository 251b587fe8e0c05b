//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin shells around `PageShell`; catalog, account and back-office
//! data are loaded by the commerce backend integration, which is not part of
//! this crate.

pub mod account;
pub mod admin;
pub mod auth;
pub mod permission_denied;
pub mod shop;
