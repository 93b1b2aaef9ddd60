//! nonsense - flag nonsense text with a battery of statistical heuristics
//!
//! This library provides the filter battery (trigram diversity, dominant
//! characters and words, repetition runs, word length, pure punctuation),
//! the classifier that aggregates them, and the HTTP-agnostic API and
//! configuration used by the `nonsense` binary.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod core;
pub mod output;

pub use crate::core::models::{BulkItem, BulkResult, ClassificationResult, FilterResult, RowId};
pub use crate::core::services::Classifier;
