//! Request and response types for the API

use serde::{Deserialize, Serialize};

use crate::core::models::{BulkItem, BulkResult};

/// `POST /api/test` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRequest {
    /// Text to classify
    #[serde(default)]
    pub text: Option<String>,
}

/// `POST /api/test-bulk` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRequest {
    /// Rows to classify
    #[serde(default)]
    pub texts: Option<Vec<BulkItem>>,
}

/// `POST /api/test-bulk` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkResponse {
    /// One result per input row, in input order
    pub results: Vec<BulkResult>,
}
