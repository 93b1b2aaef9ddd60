//! Core domain logic for nonsense
//!
//! This module contains pure classification logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Result types (FilterResult, ClassificationResult, BulkItem, BulkResult)
//! - `filters/` - The `Filter` trait and the seven built-in heuristics
//! - `services/` - The classifier that runs the battery, single and bulk

pub mod filters;
pub mod models;
pub mod services;
