//! Pure punctuation: no letters or digits at all ("!!! ??? ...")

use super::{Filter, FilterError, FilterOutcome};

/// Fires when the non-whitespace text has no alphanumeric character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurePunctuationFilter;

impl PurePunctuationFilter {
    /// Name reported in `flaggedBy`
    pub const NAME: &'static str = "Pure Punctuation Filter";
}

impl Filter for PurePunctuationFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, text: &str) -> Result<FilterOutcome, FilterError> {
        let mut visible = text.chars().filter(|c| !c.is_whitespace()).peekable();
        if visible.peek().is_none() {
            return Ok(FilterOutcome::clear());
        }

        let outcome = if visible.any(char::is_alphanumeric) {
            FilterOutcome::clear()
        } else {
            FilterOutcome::flagged()
        };
        Ok(outcome)
    }
}
