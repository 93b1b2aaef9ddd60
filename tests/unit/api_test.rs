//! Tests for the HTTP-agnostic API handlers

use nonsense::api::{BulkRequest, ErrorCode, TestRequest, test_bulk, test_text};
use nonsense::config::BulkConfig;
use nonsense::{BulkItem, Classifier};

#[test]
fn test_text_classifies() {
    let req: TestRequest = serde_json::from_str(r#"{"text":"aaaaaaaaaa"}"#).unwrap();
    let result = test_text(&Classifier::standard(), &req).unwrap();
    assert!(result.is_nonsense);
}

#[test]
fn test_text_empty_string_is_valid() {
    let req = TestRequest {
        text: Some(String::new()),
    };
    let result = test_text(&Classifier::standard(), &req).unwrap();
    assert!(!result.is_nonsense);
}

#[test]
fn test_text_missing_text() {
    let req: TestRequest = serde_json::from_str("{}").unwrap();
    let err = test_text(&Classifier::standard(), &req).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert_eq!(err.body().error, "Missing text");
}

#[test]
fn test_bulk_classifies_rows() {
    let req = BulkRequest {
        texts: Some(vec![
            BulkItem::new("lol lol lol", 1_i64),
            BulkItem::new("normal sentence here", 2_i64),
        ]),
    };
    let response = test_bulk(&Classifier::standard(), &req, &BulkConfig::default()).unwrap();

    assert_eq!(response.results.len(), 2);
    assert!(response.results[0].is_nonsense);
    assert!(!response.results[1].is_nonsense);
}

#[test]
fn test_bulk_missing_texts() {
    let err = test_bulk(&Classifier::standard(), &BulkRequest::default(), &BulkConfig::default())
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message, "Expected array of texts");
}

#[test]
fn test_bulk_empty_array() {
    let req = BulkRequest {
        texts: Some(Vec::new()),
    };
    let response = test_bulk(&Classifier::standard(), &req, &BulkConfig::default()).unwrap();
    assert!(response.results.is_empty());
}

#[test]
fn test_bulk_over_limit() {
    let limits = BulkConfig {
        max_items: 1,
        workers: 1,
    };
    let req = BulkRequest {
        texts: Some(vec![BulkItem::new("a", 1_i64), BulkItem::new("b", 2_i64)]),
    };
    let err = test_bulk(&Classifier::standard(), &req, &limits).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert!(err.message.starts_with("Too many texts"));
}

#[test]
fn test_error_codes() {
    assert_eq!(ErrorCode::NotFound.status_code(), 404);
    assert_eq!(ErrorCode::MethodNotAllowed.status_code(), 405);
    assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL_ERROR");
}
