//! Definition kind tags
//!
//! Every [`Definition`](crate::Definition) carries exactly one [`DefinitionKind`].
//! Handlers and validators are registered against these tags, so the tag is
//! the dispatch key for the whole workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable type tag for a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    /// Farm (marker only, never reversed)
    Farm,
    /// Web application (marker only, never reversed)
    WebApplication,
    /// Site collection
    Site,
    /// Web (root or sub web)
    Web,
    /// List or library
    List,
    /// Base field
    Field,
    /// Multi-line text field
    NoteField,
    /// Publishing HTML field
    HtmlField,
    /// Content type
    ContentType,
}

impl DefinitionKind {
    /// All known kinds, in declaration order
    pub const ALL: [DefinitionKind; 9] = [
        Self::Farm,
        Self::WebApplication,
        Self::Site,
        Self::Web,
        Self::List,
        Self::Field,
        Self::NoteField,
        Self::HtmlField,
        Self::ContentType,
    ];

    /// Stable snake_case identifier
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Farm => "farm",
            Self::WebApplication => "web_application",
            Self::Site => "site",
            Self::Web => "web",
            Self::List => "list",
            Self::Field => "field",
            Self::NoteField => "note_field",
            Self::HtmlField => "html_field",
            Self::ContentType => "content_type",
        }
    }

    /// Definition type name used in reports, e.g. `FieldDefinition`
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Farm => "FarmDefinition",
            Self::WebApplication => "WebApplicationDefinition",
            Self::Site => "SiteDefinition",
            Self::Web => "WebDefinition",
            Self::List => "ListDefinition",
            Self::Field => "FieldDefinition",
            Self::NoteField => "NoteFieldDefinition",
            Self::HtmlField => "HtmlFieldDefinition",
            Self::ContentType => "ContentTypeDefinition",
        }
    }

    /// Fully qualified type name used in reports
    #[must_use]
    pub fn full_type_name(&self) -> String {
        format!("rev_model::definition::{}", self.type_name())
    }

    /// Whether the kind is one of the field variants
    #[inline]
    #[must_use]
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field | Self::NoteField | Self::HtmlField)
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown definition kind identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown definition kind: '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for DefinitionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
