//! Trigram diversity
//!
//! Keyboard mashing and templated filler reuse the same few 3-character
//! windows. The filter measures the share of distinct windows among all of
//! them and fires when diversity is too low.

use std::collections::HashSet;

use super::{Filter, FilterError, FilterOutcome};

/// Fires when distinct trigrams make up too small a share of all trigrams
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigramFilter {
    min_unique_ratio: f64,
    min_trigrams: usize,
}

impl TrigramFilter {
    /// Name reported in `flaggedBy`
    pub const NAME: &'static str = "Trigram Filter";

    /// Default minimum distinct/total ratio
    pub const DEFAULT_MIN_UNIQUE_RATIO: f64 = 0.35;

    /// Default minimum number of trigrams before the ratio is trusted
    pub const DEFAULT_MIN_TRIGRAMS: usize = 8;

    /// Create a filter that fires below `min_unique_ratio`, once the text has
    /// at least `min_trigrams` trigrams
    #[must_use]
    pub const fn new(min_unique_ratio: f64, min_trigrams: usize) -> Self {
        Self {
            min_unique_ratio,
            min_trigrams,
        }
    }

    /// Distinct/total trigram ratio and the trigram count, over lowercased
    /// characters. `None` for text shorter than three characters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn unique_ratio(text: &str) -> Option<(f64, usize)> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        if chars.len() < 3 {
            return None;
        }

        let total = chars.len() - 2;
        let distinct: HashSet<&[char]> = chars.windows(3).collect();
        Some((distinct.len() as f64 / total as f64, total))
    }
}

impl Default for TrigramFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_UNIQUE_RATIO, Self::DEFAULT_MIN_TRIGRAMS)
    }
}

impl Filter for TrigramFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, text: &str) -> Result<FilterOutcome, FilterError> {
        let outcome = match Self::unique_ratio(text) {
            Some((ratio, total)) if total >= self.min_trigrams && ratio < self.min_unique_ratio => {
                FilterOutcome::flagged()
            },
            _ => FilterOutcome::clear(),
        };
        Ok(outcome)
    }
}
