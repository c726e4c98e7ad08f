//! Validation records
//!
//! [`PropertyValidationResult`] is one compared property;
//! [`ModelValidationResult`] groups the records of one original node.

use rev_model::{Definition, DefinitionKind};
use serde::Serialize;

/// Prefix of original-side property paths
pub const SRC_PREFIX: &str = "s";

/// Prefix of reversed-side property paths
pub const DST_PREFIX: &str = "d";

/// Note on records whose property is unset in both trees
pub const UNSET_ON_BOTH_SIDES: &str = "not set on either side";

/// Outcome of comparing one property across both trees
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyValidationResult {
    /// Original-side property path, e.g. `s.title`
    pub src_name: String,
    /// Canonical original value; `None` if unset
    pub src_value: Option<String>,
    /// Reversed-side property path, e.g. `d.title`
    pub dst_name: String,
    /// Canonical reversed value; `None` if unset
    pub dst_value: Option<String>,
    /// Whether both canonical values agree
    pub is_valid: bool,
    /// Diagnostic naming both sides; also set for notes on valid records
    pub message: Option<String>,
}

impl PropertyValidationResult {
    /// Compare two canonical values of property `name`
    ///
    /// Both unset is valid with a note; one side unset is invalid.
    #[must_use]
    pub fn compare(name: &str, src_value: Option<String>, dst_value: Option<String>) -> Self {
        let src_name = format!("{SRC_PREFIX}.{name}");
        let dst_name = format!("{DST_PREFIX}.{name}");

        let (is_valid, message) = match (&src_value, &dst_value) {
            (None, None) => (true, Some(UNSET_ON_BOTH_SIDES.to_string())),
            (Some(src), None) => (
                false,
                Some(format!("{dst_name} is unset, {src_name} = '{src}'")),
            ),
            (None, Some(dst)) => (
                false,
                Some(format!("{src_name} is unset, {dst_name} = '{dst}'")),
            ),
            (Some(src), Some(dst)) if src == dst => (true, None),
            (Some(src), Some(dst)) => (
                false,
                Some(format!("{src_name} = '{src}' does not match {dst_name} = '{dst}'")),
            ),
        };

        Self {
            src_name,
            src_value,
            dst_name,
            dst_value,
            is_valid,
            message,
        }
    }

    /// Record for an original node with no reversed counterpart
    #[must_use]
    pub fn missing_counterpart(kind: DefinitionKind, key: Option<&str>) -> Self {
        let key = key.map(str::to_string);
        Self {
            src_name: format!("{SRC_PREFIX}.identity"),
            dst_name: format!("{DST_PREFIX}.identity"),
            message: Some(format!(
                "missing reversed node: no {kind} with identity '{}'",
                key.as_deref().unwrap_or("<none>")
            )),
            src_value: key,
            dst_value: None,
            is_valid: false,
        }
    }

    /// Valid only because neither tree sets the property
    #[inline]
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.is_valid && self.src_value.is_none() && self.dst_value.is_none()
    }

    /// Property name without side prefix
    #[must_use]
    pub fn property(&self) -> &str {
        self.src_name
            .split_once('.')
            .map_or(self.src_name.as_str(), |(_, name)| name)
    }
}

/// Validation records for one original node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelValidationResult {
    /// Original definition the records belong to
    pub model: Definition,
    /// Records in validator declaration order
    pub properties: Vec<PropertyValidationResult>,
}

impl ModelValidationResult {
    /// Create result for an original definition
    #[inline]
    #[must_use]
    pub fn new(model: Definition, properties: Vec<PropertyValidationResult>) -> Self {
        Self { model, properties }
    }

    /// Kind of the validated definition
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DefinitionKind {
        self.model.kind()
    }

    /// Identity key of the validated definition
    #[inline]
    #[must_use]
    pub fn identity_key(&self) -> Option<&str> {
        self.model.identity_key()
    }

    /// Check if every record is valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.properties.iter().all(|p| p.is_valid)
    }

    /// Invalid records
    pub fn invalid_properties(&self) -> impl Iterator<Item = &PropertyValidationResult> {
        self.properties.iter().filter(|p| !p.is_valid)
    }
}

/// Coverage hole: a node whose kind has no registered validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnvalidatedMarker {
    /// Kind without a validator
    pub kind: DefinitionKind,
    /// Identity key of the skipped original node
    pub identity_key: Option<String>,
}
