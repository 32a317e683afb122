//! Domain models for dashboard resources.

pub mod audit_log;
pub mod auth;
pub mod batch;
pub mod ee_item;
pub mod form;
pub mod mapping;
pub mod pdf;
pub mod project;
pub mod user;
