//! Classification services
//!
//! Pure orchestration over the filter battery. These services have no I/O
//! dependencies apart from logging.
//!
//! - [`classifier`] - Run the battery over one text and aggregate the verdicts
//! - [`bulk`] - Classify a batch, isolating faults per row

pub mod bulk;
pub mod classifier;

pub use bulk::{CLASSIFY_FAILED, INVALID_TEXT, MISSING_TEXT, classify_bulk};
pub use classifier::{Classifier, FilterReport, UNNAMED_FILTER};
