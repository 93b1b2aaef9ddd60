//! Classification results
//!
//! The field names serialize as `isNonsense`, `flaggedBy`, `name` and
//! `details` so existing JSON consumers keep working.

use serde::{Deserialize, Serialize};

/// The verdict of one filter that fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    /// Filter name (e.g., "Dominant Character Filter")
    pub name: String,

    /// Whether the filter fired. Only fired filters are reported, so this is
    /// not part of the wire format.
    #[serde(skip_serializing, default = "fired")]
    pub triggered: bool,

    /// Why the filter fired, when the filter explains itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

const fn fired() -> bool {
    true
}

impl FilterResult {
    /// Create a result for a filter that fired
    pub fn triggered(name: impl Into<String>, details: Option<String>) -> Self {
        Self {
            name: name.into(),
            triggered: true,
            details,
        }
    }
}

/// The verdict for a single text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// True iff at least one filter fired
    pub is_nonsense: bool,

    /// Filters that fired, in registration order
    pub flagged_by: Vec<FilterResult>,
}

impl ClassificationResult {
    /// Build a result from the filters that fired
    ///
    /// `is_nonsense` is derived from the list so the two can never disagree.
    #[must_use]
    pub fn from_flags(flagged_by: Vec<FilterResult>) -> Self {
        Self {
            is_nonsense: !flagged_by.is_empty(),
            flagged_by,
        }
    }

    /// The acceptable verdict: nothing fired
    #[must_use]
    pub const fn acceptable() -> Self {
        Self {
            is_nonsense: false,
            flagged_by: Vec::new(),
        }
    }

    /// Whether the named filter is among those that fired
    #[must_use]
    pub fn is_flagged_by(&self, name: &str) -> bool {
        self.flagged_by.iter().any(|f| f.name == name)
    }

    /// Details reported by the named filter, if it fired and explained itself
    #[must_use]
    pub fn details_for(&self, name: &str) -> Option<&str> {
        self.flagged_by
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.details.as_deref())
    }
}
