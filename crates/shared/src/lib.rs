//! Shared utilities and common types for the ParkForms dashboard client.
//!
//! This crate provides common functionality used across all other crates:
//! - Runtime configuration singleton (loaded once, read many)
//! - In-memory token store for the session credential
//! - Session-scoped key/value storage
//! - List query helpers (search, categorical filters, sort, pagination)

pub mod config;
pub mod query;
pub mod session;
pub mod token;
