//! Bulk classification
//!
//! Rows are independent, so the batch is split into contiguous chunks and
//! each chunk is classified on its own scoped thread. Chunks are joined back
//! in order, so the output lines up with the input row for row.
//!
//! Faults stay inside their row: a row without text, a row whose text is not
//! a string, or one whose classification panics, gets an `error` marker and
//! the acceptable verdict.

use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use serde_json::Value;

use crate::core::models::{BulkItem, BulkResult, ClassificationResult};

use super::Classifier;
use super::classifier::panic_message;

/// Fault marker for a row without text
pub const MISSING_TEXT: &str = "Missing text";

/// Fault marker for a row whose text is not a JSON string
pub const INVALID_TEXT: &str = "Text must be a string";

/// Fault marker for a row whose classification failed
pub const CLASSIFY_FAILED: &str = "Failed to test text";

/// Smallest chunk worth a thread of its own
const MIN_ROWS_PER_WORKER: usize = 64;

/// Classify `items` on at most `workers` threads (`0` = available cores)
///
/// The result has one entry per item, in input order.
#[must_use]
pub fn classify_bulk(classifier: &Classifier, items: &[BulkItem], workers: usize) -> Vec<BulkResult> {
    if items.is_empty() {
        return Vec::new();
    }

    let workers = effective_workers(workers, items.len());
    log::debug!("classifying batch of {} rows on {workers} worker(s)", items.len());

    if workers == 1 {
        return items.iter().map(|item| classify_row(classifier, item)).collect();
    }

    let chunk_size = items.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk.iter().map(|item| classify_row(classifier, item)).collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .zip(items.chunks(chunk_size))
            .flat_map(|(handle, chunk)| {
                handle.join().unwrap_or_else(|_| {
                    log::error!("bulk worker died; marking {} row(s) as failed", chunk.len());
                    chunk.iter().map(|item| BulkResult::faulted(item, CLASSIFY_FAILED)).collect()
                })
            })
            .collect()
    })
}

/// Classify one row, isolating its faults
fn classify_row(classifier: &Classifier, item: &BulkItem) -> BulkResult {
    classify_row_with(item, |text| classifier.classify(text))
}

fn classify_row_with<F>(item: &BulkItem, classify: F) -> BulkResult
where
    F: Fn(&str) -> ClassificationResult,
{
    let text = match &item.text {
        None => {
            log::warn!("row {} has no text", describe_row(item));
            return BulkResult::faulted(item, MISSING_TEXT);
        },
        Some(Value::String(text)) => text,
        Some(other) => {
            log::warn!("row {} has non-string text: {other}", describe_row(item));
            return BulkResult::faulted(item, INVALID_TEXT);
        },
    };

    match panic::catch_unwind(AssertUnwindSafe(|| classify(text))) {
        Ok(result) => BulkResult::classified(item, result),
        Err(payload) => {
            log::error!(
                "failed to classify row {}: {}",
                describe_row(item),
                panic_message(payload.as_ref())
            );
            BulkResult::faulted(item, CLASSIFY_FAILED)
        },
    }
}

fn describe_row(item: &BulkItem) -> String {
    item.row_number.as_ref().map_or_else(|| "<unnumbered>".to_string(), ToString::to_string)
}

/// Workers actually used for a batch of `rows`
fn effective_workers(requested: usize, rows: usize) -> usize {
    let available = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    let requested = if requested == 0 { available } else { requested };
    let useful = rows.div_ceil(MIN_ROWS_PER_WORKER);
    requested.min(useful).max(1)
}
