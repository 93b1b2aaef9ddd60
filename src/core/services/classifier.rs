//! Classifier service - aggregates the filter battery
//!
//! The classifier owns an explicit, ordered list of filters. Every filter sees
//! the same input; the ones that fire are reported in registration order.
//! A filter that fails or panics is logged and counted as not fired, so one
//! broken heuristic never aborts a classification.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::core::filters::{Filter, FilterError, FilterOutcome, standard_battery};
use crate::core::models::{BulkItem, BulkResult, ClassificationResult, FilterResult};

use super::bulk;

/// Outcome of one filter for one text, faults included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    /// Filter name
    pub name: String,
    /// Verdict, or the fault that replaced it
    pub outcome: Result<FilterOutcome, FilterError>,
}

impl FilterReport {
    /// Whether the filter fired (a fault never fires)
    #[must_use]
    pub fn triggered(&self) -> bool {
        self.outcome.as_ref().is_ok_and(|o| o.triggered)
    }
}

/// Runs a fixed, ordered battery of filters
#[derive(Debug)]
pub struct Classifier {
    filters: Vec<Box<dyn Filter>>,
}

impl Classifier {
    /// Create a classifier over `filters`, run in the given order
    #[must_use]
    pub fn new(filters: Vec<Box<dyn Filter>>) -> Self {
        Self { filters }
    }

    /// The built-in battery with default thresholds
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_battery())
    }

    /// Names of the registered filters, in order
    #[must_use]
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Number of registered filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filter is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter and report each outcome, faults included
    #[must_use]
    pub fn evaluate(&self, text: &str) -> Vec<FilterReport> {
        self.filters.iter().map(|filter| run_isolated(filter.as_ref(), text)).collect()
    }

    /// Classify one text
    ///
    /// Faulting filters are logged and skipped; the result is always
    /// well-formed.
    #[must_use]
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let mut flagged_by = Vec::new();

        for report in self.evaluate(text) {
            match report.outcome {
                Ok(outcome) if outcome.triggered => {
                    flagged_by.push(FilterResult::triggered(report.name, outcome.details));
                },
                Ok(_) => {},
                Err(err) => log::error!("Error in {}: {err}", report.name),
            }
        }

        let result = ClassificationResult::from_flags(flagged_by);
        log::debug!(
            "classified {} chars: nonsense={} flagged_by={}",
            text.chars().count(),
            result.is_nonsense,
            result.flagged_by.len()
        );
        result
    }

    /// Classify a batch, preserving input order and row identifiers
    ///
    /// Uses all available cores; see [`bulk::classify_bulk`].
    #[must_use]
    pub fn classify_bulk(&self, items: &[BulkItem]) -> Vec<BulkResult> {
        bulk::classify_bulk(self, items, 0)
    }

    /// Classify a batch on at most `workers` threads (`0` = available cores)
    #[must_use]
    pub fn classify_bulk_with(&self, items: &[BulkItem], workers: usize) -> Vec<BulkResult> {
        bulk::classify_bulk(self, items, workers)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

/// Name reported for a filter whose `name()` itself panics
pub const UNNAMED_FILTER: &str = "<unnamed filter>";

/// Evaluate one filter, turning a panic into a [`FilterError::Panicked`]
///
/// Both `name()` and `evaluate()` run inside the guard.
fn run_isolated(filter: &dyn Filter, text: &str) -> FilterReport {
    panic::catch_unwind(AssertUnwindSafe(|| FilterReport {
        name: filter.name().to_string(),
        outcome: filter.evaluate(text),
    }))
    .unwrap_or_else(|payload| {
        let name = panic::catch_unwind(AssertUnwindSafe(|| filter.name().to_string()))
            .unwrap_or_else(|_| UNNAMED_FILTER.to_string());
        FilterReport {
            outcome: Err(FilterError::Panicked {
                filter: name.clone(),
                message: panic_message(payload.as_ref()),
            }),
            name,
        }
    })
}

/// Best-effort text of a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
