//! Average word length
//!
//! Text without spaces, URL-like blobs and base64 noise have an average
//! "word" far longer than natural language.

use super::{Filter, FilterError, FilterOutcome};

/// Fires when characters per whitespace-separated word exceed a limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordLengthFilter {
    max_average: f64,
}

impl WordLengthFilter {
    /// Name reported in `flaggedBy`
    pub const NAME: &'static str = "Word to Character Ratio Filter";

    /// Default average word length above which the filter fires
    pub const DEFAULT_MAX_AVERAGE: f64 = 15.0;

    /// Create a filter that fires when the average exceeds `max_average`
    #[must_use]
    pub const fn new(max_average: f64) -> Self {
        Self { max_average }
    }

    /// Characters of the whole text (whitespace included) per word
    ///
    /// `None` when the text has no words.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_word_length(text: &str) -> Option<f64> {
        let words = text.split_whitespace().count();
        if words == 0 {
            return None;
        }
        Some(text.chars().count() as f64 / words as f64)
    }
}

impl Default for WordLengthFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_AVERAGE)
    }
}

impl Filter for WordLengthFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, text: &str) -> Result<FilterOutcome, FilterError> {
        let outcome = match Self::average_word_length(text) {
            Some(average) if average > self.max_average => FilterOutcome::flagged_with(format!(
                "Average word length: {average:.1} characters"
            )),
            _ => FilterOutcome::clear(),
        };
        Ok(outcome)
    }
}
