//! Property values and canonical formatting
//!
//! Validation never compares typed values directly. Both sides are rendered
//! through [`PropertyValue::canonical`] first, so `Int(3)` and `Text("3")`
//! are the same value as far as a comparison is concerned.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single readable property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Globally unique identifier
    Guid(Uuid),
    /// Free text
    Text(String),
}

impl PropertyValue {
    /// Canonical string form used for equality checks and reports
    ///
    /// - text is kept as-is
    /// - booleans render as `true` / `false`
    /// - integers render in decimal
    /// - guids render lower-case, hyphenated
    #[must_use]
    pub fn canonical(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Guid(g) => g.hyphenated().to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Whether two values are equal once canonicalized
    #[inline]
    #[must_use]
    pub fn canonical_eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Uuid> for PropertyValue {
    fn from(value: Uuid) -> Self {
        Self::Guid(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Render an optional value; unset renders as `None`
#[must_use]
pub fn canonical_opt(value: Option<&PropertyValue>) -> Option<String> {
    value.map(PropertyValue::canonical)
}
