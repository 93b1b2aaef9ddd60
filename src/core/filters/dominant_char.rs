//! Dominant character
//!
//! Fires when a single non-whitespace character makes up too much of the
//! text, e.g. "aaaaaaaaab" or "!!!!!?".

use std::collections::HashMap;

use super::{Filter, FilterError, FilterOutcome, percentage};

/// The most frequent non-whitespace character and its share of the text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantChar {
    /// The character (first one in the text on ties)
    pub character: char,
    /// How often it appears
    pub count: usize,
    /// Number of non-whitespace characters
    pub total: usize,
    /// `count / total * 100`
    pub percentage: f64,
}

impl DominantChar {
    /// Find the dominant character of `text`, ignoring whitespace
    ///
    /// `None` when the text is empty or all whitespace.
    #[must_use]
    pub fn of(text: &str) -> Option<Self> {
        let mut counts: HashMap<char, usize> = HashMap::new();
        let mut first_seen: Vec<char> = Vec::new();
        let mut total = 0;

        for c in text.chars().filter(|c| !c.is_whitespace()) {
            total += 1;
            let count = counts.entry(c).or_insert(0);
            if *count == 0 {
                first_seen.push(c);
            }
            *count += 1;
        }

        // Strictly greater keeps the earliest character on ties
        let mut best: Option<(char, usize)> = None;
        for c in first_seen {
            let count = counts[&c];
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((c, count));
            }
        }

        best.map(|(character, count)| Self {
            character,
            count,
            total,
            percentage: percentage(count, total),
        })
    }
}

/// Fires when one character exceeds a share of the non-whitespace text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantCharacterFilter {
    max_percentage: f64,
    min_chars: usize,
}

impl DominantCharacterFilter {
    /// Name reported in `flaggedBy`
    pub const NAME: &'static str = "Dominant Character Filter";

    /// Default share above which the filter fires
    pub const DEFAULT_MAX_PERCENTAGE: f64 = 50.0;

    /// Default minimum number of non-whitespace characters
    pub const DEFAULT_MIN_CHARS: usize = 5;

    /// Create a filter that fires above `max_percentage` once the text has at
    /// least `min_chars` non-whitespace characters
    #[must_use]
    pub const fn new(max_percentage: f64, min_chars: usize) -> Self {
        Self {
            max_percentage,
            min_chars,
        }
    }
}

impl Default for DominantCharacterFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PERCENTAGE, Self::DEFAULT_MIN_CHARS)
    }
}

impl Filter for DominantCharacterFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, text: &str) -> Result<FilterOutcome, FilterError> {
        let outcome = match DominantChar::of(text) {
            Some(dominant)
                if dominant.total >= self.min_chars
                    && dominant.percentage > self.max_percentage =>
            {
                FilterOutcome::flagged_with(format!(
                    "'{}' appears {:.1}% of the time",
                    dominant.character, dominant.percentage
                ))
            },
            _ => FilterOutcome::clear(),
        };
        Ok(outcome)
    }
}
