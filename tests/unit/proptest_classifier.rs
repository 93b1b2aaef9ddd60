//! Property-based tests for the classifier
//!
//! Uses proptest to verify properties that should hold for all inputs.

use nonsense::core::filters::{Filter, PurePunctuationFilter};
use nonsense::{BulkItem, Classifier, RowId};
use proptest::prelude::*;

proptest! {
    /// The verdict always agrees with the list of fired filters
    #[test]
    fn verdict_matches_flags(text in "\\PC{0,80}") {
        let result = Classifier::standard().classify(&text);
        prop_assert_eq!(result.is_nonsense, !result.flagged_by.is_empty());
    }

    /// Classification is a pure function of the text
    #[test]
    fn classification_is_deterministic(text in "\\PC{0,80}") {
        let classifier = Classifier::standard();
        prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
    }

    /// Flagged filters appear in registration order, each at most once
    #[test]
    fn flags_follow_registration_order(text in "[a-c !.]{0,40}") {
        let classifier = Classifier::standard();
        let names = classifier.filter_names();
        let result = classifier.classify(&text);

        let positions: Vec<usize> = result
            .flagged_by
            .iter()
            .map(|f| names.iter().position(|n| *n == f.name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// No built-in filter faults on arbitrary input
    #[test]
    fn built_in_filters_never_fault(text in "\\PC{0,80}") {
        let reports = Classifier::standard().evaluate(&text);
        prop_assert!(reports.iter().all(|r| r.outcome.is_ok()));
    }

    /// Text without letters or digits is pure punctuation
    #[test]
    fn punctuation_only_fires(text in "[!?.,;:]{1,20}") {
        prop_assert!(PurePunctuationFilter.is_triggered(&text));
    }

    /// Bulk output lines up with its input
    #[test]
    fn bulk_preserves_rows(texts in prop::collection::vec("[a-z !]{0,20}", 0..50)) {
        let items: Vec<BulkItem> = texts
            .iter()
            .zip(0_i64..)
            .map(|(text, row)| BulkItem::new(text.as_str(), row))
            .collect();
        let classifier = Classifier::standard();
        let results = classifier.classify_bulk_with(&items, 3);

        prop_assert_eq!(results.len(), items.len());
        for (row, (item, result)) in items.iter().zip(&results).enumerate() {
            prop_assert_eq!(&result.row_number, &Some(RowId::Number(i64::try_from(row).unwrap())));
            prop_assert_eq!(&result.text, &item.text);
            let single = classifier.classify(item.as_text().unwrap());
            prop_assert_eq!(result.is_nonsense, single.is_nonsense);
        }
    }
}
