//! Domain models for nonsense
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`FilterResult`] - "This filter fired, and here is why"
//! - [`ClassificationResult`] - The verdict for one text
//! - [`BulkItem`] / [`BulkResult`] - One row of a batch, in and out
//! - [`RowId`] - The caller-supplied row identifier carried through a batch

mod bulk;
mod classification;

pub use bulk::{BulkItem, BulkResult, RowId};
pub use classification::{ClassificationResult, FilterResult};
