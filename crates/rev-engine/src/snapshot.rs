//! In-memory remote snapshot
//!
//! [`SnapshotRemote`] serves a captured remote object tree through
//! [`RemoteClient`]. It keeps the captured child order, can be told to fail on
//! specific entities, and counts entity reads.

use crate::error::RemoteError;
use crate::remote::{Collection, RemoteClient, RemoteEntity, RemoteHandle, RemoteQuery};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// One captured remote entity and its child collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteNode {
    /// Remote identifier, unique within the snapshot
    pub id: String,
    /// Property bag as read from the remote
    #[serde(default)]
    pub properties: Map<String, Value>,
    /// Child collections, each in remote order
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub collections: BTreeMap<Collection, Vec<RemoteNode>>,
}

impl RemoteNode {
    /// Create node without properties or children
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set a property, builder style
    #[must_use]
    pub fn with_property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Append a child to `collection`, builder style
    #[must_use]
    pub fn with_child(mut self, collection: Collection, child: RemoteNode) -> Self {
        self.collections.entry(collection).or_default().push(child);
        self
    }

    /// Declare an empty collection, builder style
    #[must_use]
    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collections.entry(collection).or_default();
        self
    }
}

#[derive(Debug)]
struct Entry {
    properties: Map<String, Value>,
    collections: BTreeMap<Collection, Vec<(RemoteHandle, Map<String, Value>)>>,
}

/// [`RemoteClient`] over a captured object tree
#[derive(Debug)]
pub struct SnapshotRemote {
    roots: Vec<RemoteHandle>,
    entries: HashMap<RemoteHandle, Entry>,
    failing: HashSet<RemoteHandle>,
    reads: AtomicUsize,
}

impl SnapshotRemote {
    /// Index a single captured tree
    ///
    /// # Errors
    /// Returns error if two entities share an id
    pub fn new(root: RemoteNode) -> Result<Self, RemoteError> {
        Self::from_roots([root])
    }

    /// Index several captured trees
    ///
    /// # Errors
    /// Returns error if two entities share an id
    pub fn from_roots(roots: impl IntoIterator<Item = RemoteNode>) -> Result<Self, RemoteError> {
        let mut remote = Self {
            roots: Vec::new(),
            entries: HashMap::new(),
            failing: HashSet::new(),
            reads: AtomicUsize::new(0),
        };
        for root in roots {
            remote.roots.push(RemoteHandle::new(root.id.clone()));
            remote.index(root)?;
        }
        Ok(remote)
    }

    /// Load a snapshot from JSON; accepts one tree or an array of trees
    ///
    /// # Errors
    /// Returns error on malformed JSON or duplicate ids
    pub fn from_json(json: &str) -> Result<Self, RemoteError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| RemoteError::new(format!("invalid snapshot: {e}")))?;
        let roots: Vec<RemoteNode> = if value.is_array() {
            serde_json::from_value(value)
        } else {
            serde_json::from_value(value).map(|root| vec![root])
        }
        .map_err(|e| RemoteError::new(format!("invalid snapshot: {e}")))?;
        Self::from_roots(roots)
    }

    /// Make every call touching `handle` fail
    #[must_use]
    pub fn failing_on(mut self, handle: impl Into<RemoteHandle>) -> Self {
        self.failing.insert(handle.into());
        self
    }

    /// Number of entity reads served so far
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Handles of the captured roots, in load order
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[RemoteHandle] {
        &self.roots
    }

    /// Whether the snapshot knows `handle`
    #[must_use]
    pub fn contains(&self, handle: &RemoteHandle) -> bool {
        self.entries.contains_key(handle)
    }

    fn index(&mut self, node: RemoteNode) -> Result<(), RemoteError> {
        let handle = RemoteHandle::new(node.id);
        if self.entries.contains_key(&handle) {
            return Err(RemoteError::new(format!("duplicate entity id '{handle}'")));
        }

        let mut collections = BTreeMap::new();
        let mut pending = Vec::new();
        for (collection, children) in node.collections {
            let refs = collections.entry(collection).or_insert_with(Vec::new);
            for child in children {
                refs.push((RemoteHandle::new(child.id.clone()), child.properties.clone()));
                pending.push(child);
            }
        }

        self.entries.insert(
            handle,
            Entry {
                properties: node.properties,
                collections,
            },
        );
        for child in pending {
            self.index(child)?;
        }
        Ok(())
    }

    fn entry(&self, handle: &RemoteHandle) -> Result<&Entry, RemoteError> {
        if self.failing.contains(handle) {
            return Err(RemoteError::new(format!("injected failure on '{handle}'")));
        }
        self.entries
            .get(handle)
            .ok_or_else(|| RemoteError::not_found(handle))
    }
}

impl RemoteClient for SnapshotRemote {
    fn children(
        &self,
        parent: &RemoteHandle,
        collection: Collection,
        query: &RemoteQuery,
    ) -> Result<Vec<RemoteHandle>, RemoteError> {
        let entry = self.entry(parent)?;
        Ok(entry
            .collections
            .get(&collection)
            .map(|children| {
                children
                    .iter()
                    .filter(|(_, props)| query.matches(props))
                    .map(|(handle, _)| handle.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn read(&self, handle: &RemoteHandle) -> Result<RemoteEntity, RemoteError> {
        let entry = self.entry(handle)?;
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(RemoteEntity::new(handle.clone(), entry.properties.clone()))
    }

    fn collections(&self, parent: &RemoteHandle) -> Result<Vec<Collection>, RemoteError> {
        Ok(self.entry(parent)?.collections.keys().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> RemoteNode {
        RemoteNode::new("site")
            .with_property("Url", "/")
            .with_child(
                Collection::Fields,
                RemoteNode::new("f-a").with_property("TypeAsString", "Text"),
            )
            .with_child(
                Collection::Fields,
                RemoteNode::new("f-b").with_property("TypeAsString", "HTML"),
            )
            .with_collection(Collection::Features)
    }

    #[test]
    fn children_in_order_with_filter() {
        let remote = SnapshotRemote::new(tree()).unwrap();
        let site = RemoteHandle::new("site");

        let all = remote
            .children(&site, Collection::Fields, &RemoteQuery::all())
            .unwrap();
        assert_eq!(all, vec![RemoteHandle::new("f-a"), RemoteHandle::new("f-b")]);

        let html = remote
            .children(&site, Collection::Fields, &RemoteQuery::of_type("HTML"))
            .unwrap();
        assert_eq!(html, vec![RemoteHandle::new("f-b")]);

        let none = remote
            .children(&site, Collection::Webs, &RemoteQuery::all())
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn collections_and_reads() {
        let remote = SnapshotRemote::new(tree()).unwrap();
        let site = RemoteHandle::new("site");

        assert_eq!(
            remote.collections(&site).unwrap(),
            vec![Collection::Fields, Collection::Features]
        );
        assert_eq!(remote.read_count(), 0);
        let entity = remote.read(&site).unwrap();
        assert_eq!(entity.text("Url").as_deref(), Some("/"));
        assert_eq!(remote.read_count(), 1);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let root = RemoteNode::new("x").with_child(Collection::Webs, RemoteNode::new("x"));
        assert!(SnapshotRemote::new(root).is_err());
    }

    #[test]
    fn unknown_and_failing_handles() {
        let remote = SnapshotRemote::new(tree()).unwrap().failing_on("f-a");
        assert!(remote.read(&RemoteHandle::new("nope")).is_err());

        let err = remote.read(&RemoteHandle::new("f-a")).unwrap_err();
        assert!(err.message().contains("injected failure"));
        assert!(remote.read(&RemoteHandle::new("f-b")).is_ok());
    }

    #[test]
    fn from_json_single_and_array() {
        let single = r#"{ "id": "s1", "collections": { "webs": [ { "id": "w1" } ] } }"#;
        let remote = SnapshotRemote::from_json(single).unwrap();
        assert!(remote.contains(&RemoteHandle::new("w1")));

        let many = r#"[ { "id": "s1" }, { "id": "s2" } ]"#;
        let remote = SnapshotRemote::from_json(many).unwrap();
        assert!(remote.contains(&RemoteHandle::new("s2")));
        assert_eq!(
            remote.roots(),
            &[RemoteHandle::new("s1"), RemoteHandle::new("s2")]
        );

        assert!(SnapshotRemote::from_json("not json").is_err());
    }
}
