//! Remote read collaborator
//!
//! The engine never talks to the remote system directly. Everything it needs
//! goes through [`RemoteClient`]: list the children of an entity, read the
//! current property values of an entity, and report which child collections
//! an entity carries. Sessions, batching and retries belong to the
//! implementation behind the trait.

use crate::error::RemoteError;
use rev_model::DefinitionKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Remote property carrying the entity's type name, used by type filters
pub const TYPE_AS_STRING: &str = "TypeAsString";

/// Opaque, read-only handle to one live remote entity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteHandle(String);

impl RemoteHandle {
    /// Wrap a remote identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The remote identifier
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RemoteHandle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Child collections a remote entity may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Site columns
    Fields,
    /// Sub webs
    Webs,
    /// Lists and libraries
    Lists,
    /// Content types
    ContentTypes,
    /// Activated features (no model kind)
    Features,
    /// Security groups (no model kind)
    Groups,
}

impl Collection {
    /// Base definition kind stored in this collection, if the model has one
    #[must_use]
    pub fn kind(&self) -> Option<DefinitionKind> {
        match self {
            Self::Fields => Some(DefinitionKind::Field),
            Self::Webs => Some(DefinitionKind::Web),
            Self::Lists => Some(DefinitionKind::List),
            Self::ContentTypes => Some(DefinitionKind::ContentType),
            Self::Features | Self::Groups => None,
        }
    }

    /// Stable snake_case identifier
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fields => "fields",
            Self::Webs => "webs",
            Self::Lists => "lists",
            Self::ContentTypes => "content_types",
            Self::Features => "features",
            Self::Groups => "groups",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Child query filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteQuery {
    /// Keep only entities whose `TypeAsString` equals this value
    pub type_filter: Option<String>,
}

impl RemoteQuery {
    /// Query without filters
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Query filtered by remote type name
    #[inline]
    #[must_use]
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self {
            type_filter: Some(type_name.into()),
        }
    }

    /// Whether an entity's property bag passes this query
    #[must_use]
    pub fn matches(&self, properties: &Map<String, Value>) -> bool {
        match &self.type_filter {
            None => true,
            Some(wanted) => properties
                .get(TYPE_AS_STRING)
                .and_then(Value::as_str)
                .is_some_and(|t| t == wanted),
        }
    }
}

/// Property values of one remote entity, as read at call time
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteEntity {
    handle: RemoteHandle,
    properties: Map<String, Value>,
}

impl RemoteEntity {
    /// Create entity from a property bag
    #[inline]
    #[must_use]
    pub fn new(handle: RemoteHandle, properties: Map<String, Value>) -> Self {
        Self { handle, properties }
    }

    /// Handle this entity was read from
    #[inline]
    #[must_use]
    pub fn handle(&self) -> &RemoteHandle {
        &self.handle
    }

    /// Raw property value
    #[inline]
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Text property; `None` when missing, null or not text
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        self.raw(name).and_then(Value::as_str).map(str::to_string)
    }

    /// Boolean property
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.raw(name).and_then(Value::as_bool)
    }

    /// Integer property
    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.raw(name).and_then(Value::as_i64)
    }

    /// Unsigned 32-bit property
    #[must_use]
    pub fn uint(&self, name: &str) -> Option<u32> {
        self.raw(name)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }

    /// Guid property, accepting braced or plain forms in any case
    #[must_use]
    pub fn guid(&self, name: &str) -> Option<Uuid> {
        let text = self.raw(name).and_then(Value::as_str)?;
        Uuid::parse_str(text.trim_matches(|c| c == '{' || c == '}')).ok()
    }
}

/// Read-only access to the remote object tree
///
/// Reads are assumed synchronous and strongly consistent. Implementations
/// must not mutate remote state from any of these calls.
pub trait RemoteClient {
    /// Handles of the immediate children of `parent` in `collection`, in remote order
    fn children(
        &self,
        parent: &RemoteHandle,
        collection: Collection,
        query: &RemoteQuery,
    ) -> Result<Vec<RemoteHandle>, RemoteError>;

    /// Current property values of `handle`
    fn read(&self, handle: &RemoteHandle) -> Result<RemoteEntity, RemoteError>;

    /// Child collections present under `parent`
    fn collections(&self, parent: &RemoteHandle) -> Result<Vec<Collection>, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn query_all_matches_everything() {
        assert!(RemoteQuery::all().matches(&Map::new()));
    }

    #[test]
    fn query_type_filter() {
        let query = RemoteQuery::of_type("HTML");
        assert!(query.matches(&props(json!({ "TypeAsString": "HTML" }))));
        assert!(!query.matches(&props(json!({ "TypeAsString": "Text" }))));
        assert!(!query.matches(&Map::new()));
    }

    #[test]
    fn entity_typed_getters() {
        let entity = RemoteEntity::new(
            RemoteHandle::new("f1"),
            props(json!({
                "Title": "Status",
                "Required": true,
                "NumberOfLines": 6,
                "Id": "{0D6E4B9A-2F1C-4C55-9E3B-1A2B3C4D5E6F}",
                "Group": null
            })),
        );

        assert_eq!(entity.text("Title").as_deref(), Some("Status"));
        assert_eq!(entity.flag("Required"), Some(true));
        assert_eq!(entity.uint("NumberOfLines"), Some(6));
        assert_eq!(entity.integer("NumberOfLines"), Some(6));
        assert_eq!(
            entity.guid("Id").unwrap().to_string(),
            "0d6e4b9a-2f1c-4c55-9e3b-1a2b3c4d5e6f"
        );
        assert_eq!(entity.text("Group"), None);
        assert_eq!(entity.flag("Title"), None);
    }

    #[test]
    fn collection_kinds() {
        assert_eq!(Collection::Fields.kind(), Some(DefinitionKind::Field));
        assert_eq!(Collection::Features.kind(), None);
        assert_eq!(Collection::ContentTypes.to_string(), "content_types");
    }
}
