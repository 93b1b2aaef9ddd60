//! Consecutive word repetition ("the the the")

use super::{Filter, FilterError, FilterOutcome, percentage, words};

/// The longest run of one repeated word, with that word's overall share
#[derive(Debug, Clone, PartialEq)]
pub struct WordRun {
    /// The repeated word, lowercased
    pub word: String,
    /// Longest consecutive run of the word
    pub length: usize,
    /// Share (in percent) of the word across the whole text
    pub percentage: f64,
}

impl WordRun {
    /// Longest run of identical consecutive words in `text`
    ///
    /// The earliest of equally long runs wins. `None` when the text has no
    /// words.
    #[must_use]
    pub fn longest(text: &str) -> Option<Self> {
        let tokens = words(text);
        let first = tokens.first()?;

        let mut best_word = first;
        let mut best_length = 1;
        let mut current_word = first;
        let mut current = 1;

        for token in &tokens[1..] {
            if token == current_word {
                current += 1;
                if current > best_length {
                    best_length = current;
                    best_word = current_word;
                }
            } else {
                current_word = token;
                current = 1;
            }
        }

        let occurrences = tokens.iter().filter(|t| *t == best_word).count();
        Some(Self {
            word: best_word.clone(),
            length: best_length,
            percentage: percentage(occurrences, tokens.len()),
        })
    }
}

/// Fires when a word repeats consecutively more than `max_run` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRepetitionFilter {
    max_run: usize,
}

impl WordRepetitionFilter {
    /// Name reported in `flaggedBy`
    pub const NAME: &'static str = "Word Repetition Filter";

    /// Default longest run that is still acceptable ("that that" is English)
    pub const DEFAULT_MAX_RUN: usize = 2;

    /// Create a filter that fires on runs longer than `max_run`
    #[must_use]
    pub const fn new(max_run: usize) -> Self {
        Self { max_run }
    }
}

impl Default for WordRepetitionFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RUN)
    }
}

impl Filter for WordRepetitionFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, text: &str) -> Result<FilterOutcome, FilterError> {
        let outcome = match WordRun::longest(text) {
            Some(run) if run.length > self.max_run => FilterOutcome::flagged_with(format!(
                "'{}' repeated {} times ({:.1}% of text)",
                run.word, run.length, run.percentage
            )),
            _ => FilterOutcome::clear(),
        };
        Ok(outcome)
    }
}
