//! Pure API handlers
//!
//! These handlers are HTTP-agnostic. They take typed input and return
//! `Result<T, ApiError>`.

use crate::config::BulkConfig;
use crate::core::models::ClassificationResult;
use crate::core::services::Classifier;

use super::error::ApiError;
use super::types::{BulkRequest, BulkResponse, TestRequest};

/// Classify a single text
pub fn test_text(
    classifier: &Classifier,
    req: &TestRequest,
) -> Result<ClassificationResult, ApiError> {
    let text = req.text.as_deref().ok_or_else(|| ApiError::bad_request("Missing text"))?;
    Ok(classifier.classify(text))
}

/// Classify a batch of rows
///
/// Rows that fault are reported inside the response; only a malformed or
/// oversized request is an error.
pub fn test_bulk(
    classifier: &Classifier,
    req: &BulkRequest,
    limits: &BulkConfig,
) -> Result<BulkResponse, ApiError> {
    let items = req.texts.as_deref().ok_or_else(|| ApiError::bad_request("Expected array of texts"))?;

    if items.len() > limits.max_items {
        return Err(ApiError::bad_request(format!(
            "Too many texts: {} (limit {})",
            items.len(),
            limits.max_items
        )));
    }

    Ok(BulkResponse {
        results: classifier.classify_bulk_with(items, limits.workers),
    })
}
