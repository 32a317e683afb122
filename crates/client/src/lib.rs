//! Data-access layer for the ParkForms dashboard.
//!
//! Everything the dashboard pages consume lives behind this crate:
//! the HTTP client with its credential lifecycle, one service per resource
//! implementing the network-with-embedded-fallback contract, the feature
//! state stores, and the navigation guard for the form-generation flow.

pub mod app;
pub mod error;
pub mod fallback;
pub mod http;
pub mod logging;
pub mod services;
pub mod settings;
pub mod state;
