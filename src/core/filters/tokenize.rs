//! Word tokenization shared by the word-level filters
//!
//! Words are split on whitespace and a fixed punctuation set, then
//! lowercased. No language-specific rules.

use std::sync::OnceLock;

use regex::Regex;

/// Runs of whitespace or `. , ! ? ; : " ' ( ) [ ] { } -`
fn word_separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[\s.,!?;:"'()\[\]{}\-]+"#).expect("word separator regex"))
}

/// Split `text` into lowercased words, dropping empty tokens
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    word_separators()
        .split(text)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}
