//! Domain layer for the ParkForms dashboard client.
//!
//! This crate contains:
//! - Wire-shape models for every dashboard resource
//! - Closed enums with `FromStr`/`Display` pairs
//! - Filter types with the `"all"` sentinel conventions
//! - Input validation rules

pub mod models;
