//! The filter battery
//!
//! Each filter is a pure function of the input text that reports whether it
//! fired and, if it explains itself, why. Filters never see each other's
//! results and can run in any order; the [`Classifier`] fixes the order.
//!
//! [`Classifier`]: crate::core::services::Classifier

use std::fmt;

use thiserror::Error;

mod char_repetition;
mod dominant_char;
mod dominant_word;
mod pure_punctuation;
mod tokenize;
mod trigram;
mod word_length;
mod word_repetition;

pub use char_repetition::{CharRun, CharacterRepetitionFilter};
pub use dominant_char::{DominantChar, DominantCharacterFilter};
pub use dominant_word::DominantWordFilter;
pub use pure_punctuation::PurePunctuationFilter;
pub use tokenize::words;
pub use trigram::TrigramFilter;
pub use word_length::WordLengthFilter;
pub use word_repetition::{WordRepetitionFilter, WordRun};

/// What a filter reports for one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Whether the filter fired
    pub triggered: bool,
    /// Explanation, only present when the filter fired
    pub details: Option<String>,
}

impl FilterOutcome {
    /// The filter did not fire
    #[must_use]
    pub const fn clear() -> Self {
        Self {
            triggered: false,
            details: None,
        }
    }

    /// The filter fired without an explanation
    #[must_use]
    pub const fn flagged() -> Self {
        Self {
            triggered: true,
            details: None,
        }
    }

    /// The filter fired and explains why
    pub fn flagged_with(details: impl Into<String>) -> Self {
        Self {
            triggered: true,
            details: Some(details.into()),
        }
    }
}

/// A fault raised while evaluating a single filter
///
/// Faults are isolated by the classifier: the filter counts as not fired and
/// the remaining filters still run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The filter reported a failure
    #[error("{filter} failed: {message}")]
    Failed {
        /// Name of the faulting filter
        filter: String,
        /// What went wrong
        message: String,
    },

    /// The filter panicked
    #[error("{filter} panicked: {message}")]
    Panicked {
        /// Name of the faulting filter
        filter: String,
        /// Panic payload, when it was a string
        message: String,
    },
}

impl FilterError {
    /// Create a failure for the named filter
    pub fn failed(filter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            filter: filter.into(),
            message: message.into(),
        }
    }
}

/// A single heuristic in the battery
pub trait Filter: fmt::Debug + Send + Sync {
    /// Display name, reported in `flaggedBy`
    fn name(&self) -> &str;

    /// Evaluate the filter against a text
    ///
    /// Returns the verdict and its explanation in one pass.
    fn evaluate(&self, text: &str) -> Result<FilterOutcome, FilterError>;

    /// Whether the filter fires for `text`; a fault counts as not firing
    fn is_triggered(&self, text: &str) -> bool {
        self.evaluate(text).is_ok_and(|outcome| outcome.triggered)
    }
}

/// The built-in battery with default thresholds, in registration order
#[must_use]
pub fn standard_battery() -> Vec<Box<dyn Filter>> {
    vec![
        Box::new(TrigramFilter::default()),
        Box::new(DominantCharacterFilter::default()),
        Box::new(CharacterRepetitionFilter::default()),
        Box::new(WordLengthFilter::default()),
        Box::new(DominantWordFilter::default()),
        Box::new(WordRepetitionFilter::default()),
        Box::new(PurePunctuationFilter),
    ]
}

/// Percentage of `part` in `whole`, `0.0` for an empty whole
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
