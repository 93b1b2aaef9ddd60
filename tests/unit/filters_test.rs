//! Parameterized tests for the filter battery
//!
//! Every filter runs with its default thresholds.

use nonsense::core::filters::{
    CharRun, CharacterRepetitionFilter, DominantChar, DominantCharacterFilter, DominantWordFilter,
    Filter, PurePunctuationFilter, TrigramFilter, WordLengthFilter, WordRepetitionFilter, WordRun,
    standard_battery, words,
};
use test_case::test_case;

// =============================================================================
// Trigram Filter
// =============================================================================

#[test_case("aaaaaaaaaa", true ; "single character mash")]
#[test_case("hahahahahaha", true ; "two character cycle")]
#[test_case("asdfasdfasdfasdf", true ; "keyboard cycle")]
#[test_case("lol lol lol", false ; "short repeated word")]
#[test_case("aaaa", false ; "too few trigrams")]
#[test_case("the quick brown fox jumps over the lazy dog", false ; "pangram")]
#[test_case("", false ; "empty")]
fn test_trigram(text: &str, expected: bool) {
    assert_eq!(TrigramFilter::default().is_triggered(text), expected, "text={text:?}");
}

#[test]
fn test_trigram_has_no_details() {
    let outcome = TrigramFilter::default().evaluate("aaaaaaaaaa").unwrap();
    assert!(outcome.triggered);
    assert_eq!(outcome.details, None);
}

#[test]
fn test_trigram_is_case_insensitive() {
    let (lower, _) = TrigramFilter::unique_ratio("abababab").unwrap();
    let (mixed, _) = TrigramFilter::unique_ratio("AbAbaBAB").unwrap();
    assert!((lower - mixed).abs() < f64::EPSILON);
}

// =============================================================================
// Dominant Character Filter
// =============================================================================

#[test_case("aaaaaaaaaa", true ; "all one character")]
#[test_case("a!!!!", true ; "punctuation dominates")]
#[test_case("hahahahahaha", false ; "exactly half is not dominant")]
#[test_case("a!!!", false ; "below minimum sample")]
#[test_case("normal sentence here", false ; "ordinary sentence")]
#[test_case("   ", false ; "whitespace only")]
fn test_dominant_character(text: &str, expected: bool) {
    assert_eq!(DominantCharacterFilter::default().is_triggered(text), expected, "text={text:?}");
}

#[test]
fn test_dominant_character_details() {
    let outcome = DominantCharacterFilter::default().evaluate("aaaaaaaaaa").unwrap();
    assert_eq!(outcome.details.as_deref(), Some("'a' appears 100.0% of the time"));
}

#[test]
fn test_dominant_character_ignores_whitespace() {
    let dominant = DominantChar::of("x x x x y").unwrap();
    assert_eq!(dominant.character, 'x');
    assert_eq!(dominant.total, 5);
    assert!((dominant.percentage - 80.0).abs() < 1e-9);
}

#[test]
fn test_dominant_character_tie_keeps_first_seen() {
    assert_eq!(DominantChar::of("abab").unwrap().character, 'a');
    assert_eq!(DominantChar::of("baba").unwrap().character, 'b');
}

// =============================================================================
// Character Repetition Filter
// =============================================================================

#[test_case("helloooooo", true ; "long vowel run")]
#[test_case("aaaaa", true ; "one past the limit")]
#[test_case("aaaa", false ; "at the limit")]
#[test_case("bookkeeper", false ; "double letters")]
#[test_case("", false ; "empty")]
fn test_character_repetition(text: &str, expected: bool) {
    assert_eq!(CharacterRepetitionFilter::default().is_triggered(text), expected, "text={text:?}");
}

#[test]
fn test_character_repetition_details() {
    let outcome = CharacterRepetitionFilter::default().evaluate("helloooooo").unwrap();
    assert_eq!(outcome.details.as_deref(), Some("'o' repeated 6 times consecutively"));
}

#[test]
fn test_character_run_earliest_wins_ties() {
    let run = CharRun::longest("xxxyyy").unwrap();
    assert_eq!(run.character, 'x');
    assert_eq!(run.length, 3);
}

// =============================================================================
// Word to Character Ratio Filter
// =============================================================================

#[test_case("supercalifragilisticexpialidocious", true ; "one very long word")]
#[test_case("abcdefghijklmnop", true ; "sixteen characters")]
#[test_case("abcdefghijklmno", false ; "exactly at the limit")]
#[test_case("normal sentence here", false ; "ordinary sentence")]
#[test_case("", false ; "empty")]
#[test_case("   ", false ; "whitespace only")]
fn test_word_length(text: &str, expected: bool) {
    assert_eq!(WordLengthFilter::default().is_triggered(text), expected, "text={text:?}");
}

#[test]
fn test_word_length_details() {
    let outcome = WordLengthFilter::default().evaluate("supercalifragilisticexpialidocious").unwrap();
    assert_eq!(outcome.details.as_deref(), Some("Average word length: 34.0 characters"));
}

#[test]
fn test_word_length_counts_whitespace() {
    let average = WordLengthFilter::average_word_length("ab cd").unwrap();
    assert!((average - 2.5).abs() < 1e-9);
}

// =============================================================================
// Dominant Word Filter
// =============================================================================

#[test_case("the the the quick fox", true ; "sixty percent")]
#[test_case("lol lol lol", true ; "one word only")]
#[test_case("the cat and the dog", false ; "forty percent")]
#[test_case("a b a b", false ; "exactly half")]
#[test_case("hi hi", false ; "below minimum sample")]
#[test_case("", false ; "empty")]
fn test_dominant_word(text: &str, expected: bool) {
    assert_eq!(DominantWordFilter::default().is_triggered(text), expected, "text={text:?}");
}

#[test]
fn test_dominant_word_has_no_details() {
    let outcome = DominantWordFilter::default().evaluate("lol lol lol").unwrap();
    assert!(outcome.triggered);
    assert_eq!(outcome.details, None);
}

// =============================================================================
// Word Repetition Filter
// =============================================================================

#[test_case("the the the quick fox", true ; "three in a row")]
#[test_case("Hello, hello! HELLO.", true ; "case and punctuation ignored")]
#[test_case("the the quick", false ; "two in a row")]
#[test_case("the cat the cat the", false ; "not consecutive")]
#[test_case("", false ; "empty")]
fn test_word_repetition(text: &str, expected: bool) {
    assert_eq!(WordRepetitionFilter::default().is_triggered(text), expected, "text={text:?}");
}

#[test_case("the the the quick fox", "'the' repeated 3 times (60.0% of text)" ; "partial share")]
#[test_case("Hello, hello! HELLO.", "'hello' repeated 3 times (100.0% of text)" ; "whole text")]
fn test_word_repetition_details(text: &str, expected: &str) {
    let outcome = WordRepetitionFilter::default().evaluate(text).unwrap();
    assert_eq!(outcome.details.as_deref(), Some(expected));
}

#[test]
fn test_word_run_counts_all_occurrences() {
    let run = WordRun::longest("go go go stop go").unwrap();
    assert_eq!(run.word, "go");
    assert_eq!(run.length, 3);
    assert!((run.percentage - 80.0).abs() < 1e-9);
}

// =============================================================================
// Pure Punctuation Filter
// =============================================================================

#[test_case("!!! ??? ...", true ; "ascii punctuation")]
#[test_case("¿¡…", true ; "unicode punctuation")]
#[test_case("a!!!", false ; "one letter")]
#[test_case("42!", false ; "digits count")]
#[test_case("数字", false ; "non latin letters count")]
#[test_case("", false ; "empty")]
#[test_case("   ", false ; "whitespace only")]
fn test_pure_punctuation(text: &str, expected: bool) {
    assert_eq!(PurePunctuationFilter.is_triggered(text), expected, "text={text:?}");
}

// =============================================================================
// Battery
// =============================================================================

#[test]
fn test_standard_battery_order() {
    let names: Vec<String> = standard_battery().iter().map(|f| f.name().to_string()).collect();
    assert_eq!(
        names,
        [
            "Trigram Filter",
            "Dominant Character Filter",
            "Character Repetition Filter",
            "Word to Character Ratio Filter",
            "Dominant Word Filter",
            "Word Repetition Filter",
            "Pure Punctuation Filter",
        ]
    );
}

#[test]
fn test_words_tokenizer() {
    assert_eq!(words("Hello, World! (it's) [fine]-ok"), ["hello", "world", "it", "s", "fine", "ok"]);
    assert!(words("... !!!").is_empty());
}
