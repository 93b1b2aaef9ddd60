//! Batch classification rows
//!
//! A batch pairs each text with a caller-supplied row identifier. Results
//! carry the identifier back unchanged, together with a per-row fault marker.
//! Rows are deserialized leniently: a row whose `text` is not a string, or
//! whose `rowNumber` is some other JSON value, still parses and is judged on
//! its own.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ClassificationResult, FilterResult};

/// Caller-supplied row identifier
///
/// Integers and strings get their own variants; any other JSON value (a
/// float, a bool, an object) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Numeric row (e.g., a spreadsheet row number)
    Number(i64),
    /// Opaque string identifier
    Text(String),
    /// Any other JSON value, echoed back as given
    Other(Value),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for RowId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One input row of a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItem {
    /// Text to classify, as sent. Only a JSON string is classified; anything
    /// else is a per-row fault, not a batch error.
    #[serde(default)]
    pub text: Option<Value>,

    /// Row identifier, echoed back in the result
    #[serde(default)]
    pub row_number: Option<RowId>,
}

impl BulkItem {
    /// Create a row with text and identifier
    pub fn new(text: impl Into<String>, row_number: impl Into<RowId>) -> Self {
        Self {
            text: Some(Value::String(text.into())),
            row_number: Some(row_number.into()),
        }
    }

    /// The text, when the row carries a string
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.text.as_ref().and_then(Value::as_str)
    }
}

/// One output row of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult {
    /// The text from the input row, as sent (absent if the row had none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,

    /// Row identifier from the input
    #[serde(default)]
    pub row_number: Option<RowId>,

    /// True iff at least one filter fired
    pub is_nonsense: bool,

    /// Filters that fired, in registration order
    pub flagged_by: Vec<FilterResult>,

    /// Fault marker; `null` when the row was classified
    pub error: Option<String>,
}

impl BulkResult {
    /// Result for a row that was classified
    #[must_use]
    pub fn classified(item: &BulkItem, result: ClassificationResult) -> Self {
        Self {
            text: item.text.clone(),
            row_number: item.row_number.clone(),
            is_nonsense: result.is_nonsense,
            flagged_by: result.flagged_by,
            error: None,
        }
    }

    /// Result for a row that faulted: acceptable verdict plus the marker
    #[must_use]
    pub fn faulted(item: &BulkItem, error: impl Into<String>) -> Self {
        Self {
            text: item.text.clone(),
            row_number: item.row_number.clone(),
            is_nonsense: false,
            flagged_by: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Whether this row faulted
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        self.error.is_some()
    }
}
