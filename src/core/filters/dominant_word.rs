//! Dominant word: one word (case-insensitive) is most of the text

use std::collections::HashMap;

use super::{Filter, FilterError, FilterOutcome, percentage, words};

/// Fires when the most common word exceeds a share of all words
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantWordFilter {
    max_percentage: f64,
    min_words: usize,
}

impl DominantWordFilter {
    /// Name reported in `flaggedBy`
    pub const NAME: &'static str = "Dominant Word Filter";

    /// Default share above which the filter fires
    pub const DEFAULT_MAX_PERCENTAGE: f64 = 50.0;

    /// Default minimum number of words
    pub const DEFAULT_MIN_WORDS: usize = 3;

    /// Create a filter that fires above `max_percentage` once the text has at
    /// least `min_words` words
    #[must_use]
    pub const fn new(max_percentage: f64, min_words: usize) -> Self {
        Self {
            max_percentage,
            min_words,
        }
    }

    /// Share (in percent) of the most common word, with the word count
    #[must_use]
    pub fn top_share(text: &str) -> Option<(f64, usize)> {
        let tokens = words(text);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in &tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let max = counts.values().copied().max()?;
        Some((percentage(max, tokens.len()), tokens.len()))
    }
}

impl Default for DominantWordFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PERCENTAGE, Self::DEFAULT_MIN_WORDS)
    }
}

impl Filter for DominantWordFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, text: &str) -> Result<FilterOutcome, FilterError> {
        let outcome = match Self::top_share(text) {
            Some((share, count)) if count >= self.min_words && share > self.max_percentage => {
                FilterOutcome::flagged()
            },
            _ => FilterOutcome::clear(),
        };
        Ok(outcome)
    }
}
