//! Consecutive character runs ("helloooooo", "!!!!!!!!")

use super::{Filter, FilterError, FilterOutcome};

/// The longest run of one repeated character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRun {
    /// The repeated character
    pub character: char,
    /// Run length
    pub length: usize,
}

impl CharRun {
    /// Longest run in `text`, scanning left to right
    ///
    /// A later run only replaces the best one when strictly longer, so the
    /// earliest of equally long runs wins. `None` for empty text.
    #[must_use]
    pub fn longest(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let first = chars.next()?;

        let mut best = Self {
            character: first,
            length: 1,
        };
        let mut previous = first;
        let mut current = 1;

        for c in chars {
            if c == previous {
                current += 1;
                if current > best.length {
                    best = Self {
                        character: c,
                        length: current,
                    };
                }
            } else {
                previous = c;
                current = 1;
            }
        }

        Some(best)
    }
}

/// Fires when a character repeats consecutively more than `max_run` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterRepetitionFilter {
    max_run: usize,
}

impl CharacterRepetitionFilter {
    /// Name reported in `flaggedBy`
    pub const NAME: &'static str = "Character Repetition Filter";

    /// Default longest run that is still acceptable
    pub const DEFAULT_MAX_RUN: usize = 4;

    /// Create a filter that fires on runs longer than `max_run`
    #[must_use]
    pub const fn new(max_run: usize) -> Self {
        Self { max_run }
    }
}

impl Default for CharacterRepetitionFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RUN)
    }
}

impl Filter for CharacterRepetitionFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, text: &str) -> Result<FilterOutcome, FilterError> {
        let outcome = match CharRun::longest(text) {
            Some(run) if run.length > self.max_run => FilterOutcome::flagged_with(format!(
                "'{}' repeated {} times consecutively",
                run.character, run.length
            )),
            _ => FilterOutcome::clear(),
        };
        Ok(outcome)
    }
}
