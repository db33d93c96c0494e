//! Business logic layer.
//!
//! Each module converts between API-facing DTOs and the SeaORM models in
//! [`crate::entities`] and applies the domain rules for its resource.
//! Functions are framework-agnostic and take a database connection explicitly.

/// Farming tool, material, plant and irrigation system catalogs
pub mod catalog;
/// Client registration and maintenance
pub mod client;
/// Global and client-scoped notifications
pub mod notification;
/// Plans with their nested input and output
pub mod plan;
/// Prize scheduling
pub mod prize;
/// Completed-plan ranking and winner selection
pub mod ranking;
/// Contributions attached to plans
pub mod support;
