//! Model tree nodes
//!
//! A [`ModelNode`] owns its definition and its children exclusively. Trees are
//! built bottom-up and child order is significant: it mirrors the order in
//! which the remote system reported the entities.

use crate::definition::Definition;
use crate::kind::DefinitionKind;
use serde::{Deserialize, Serialize};

/// Processing flags attached to a node
///
/// The core never reads these; they are hints for downstream consumers such
/// as a deployment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOptions {
    /// Node must be processed itself, not only traversed
    pub require_self_processing: bool,
}

impl Default for NodeOptions {
    fn default() -> Self {
        Self {
            require_self_processing: true,
        }
    }
}

/// A node in a model tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelNode {
    definition: Definition,
    #[serde(default)]
    options: NodeOptions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ModelNode>,
}

impl ModelNode {
    /// Create a leaf node with default options
    #[inline]
    #[must_use]
    pub fn new(definition: impl Into<Definition>) -> Self {
        Self {
            definition: definition.into(),
            options: NodeOptions::default(),
            children: Vec::new(),
        }
    }

    /// Set processing options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: NodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a child, builder style
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: ModelNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append children, builder style
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = ModelNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child
    #[inline]
    pub fn add_child(&mut self, child: ModelNode) {
        self.children.push(child);
    }

    /// The definition payload
    #[inline]
    #[must_use]
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Kind of the definition payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DefinitionKind {
        self.definition.kind()
    }

    /// Processing options
    #[inline]
    #[must_use]
    pub fn options(&self) -> NodeOptions {
        self.options
    }

    /// Children in remote order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[ModelNode] {
        &self.children
    }

    /// Whether the node has no children
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children of one kind, in order
    pub fn children_of(&self, kind: DefinitionKind) -> impl Iterator<Item = &ModelNode> {
        self.children.iter().filter(move |c| c.kind() == kind)
    }

    /// Find the child of `kind` whose identity key equals `key`
    #[must_use]
    pub fn find_child(&self, kind: DefinitionKind, key: &str) -> Option<&ModelNode> {
        self.children_of(kind)
            .find(|c| c.definition.identity_key() == Some(key))
    }

    /// Depth-first, pre-order walk over this node and its descendants
    pub fn walk(&self) -> impl Iterator<Item = &ModelNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Number of nodes of `kind` in the whole subtree
    #[must_use]
    pub fn count_of(&self, kind: DefinitionKind) -> usize {
        self.walk().filter(|n| n.kind() == kind).count()
    }

    /// Total number of nodes in the subtree, including this one
    #[must_use]
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// Split into definition and children
    #[must_use]
    pub fn into_parts(self) -> (Definition, Vec<ModelNode>) {
        (self.definition, self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{FieldDefinition, SiteDefinition, WebDefinition};
    use pretty_assertions::assert_eq;

    fn field(name: &str) -> ModelNode {
        ModelNode::new(FieldDefinition {
            internal_name: Some(name.to_string()),
            ..FieldDefinition::default()
        })
    }

    fn web(url: &str) -> ModelNode {
        ModelNode::new(WebDefinition {
            url: Some(url.to_string()),
            ..WebDefinition::default()
        })
    }

    #[test]
    fn new_node_defaults() {
        let node = ModelNode::new(SiteDefinition::default());
        assert!(node.is_leaf());
        assert!(node.options().require_self_processing);
        assert_eq!(node.kind(), DefinitionKind::Site);
    }

    #[test]
    fn children_keep_insertion_order() {
        let node = ModelNode::new(SiteDefinition::default())
            .with_child(field("A"))
            .with_child(field("B"))
            .with_child(field("C"));

        let names: Vec<_> = node
            .children()
            .iter()
            .filter_map(|c| c.definition().identity_key())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn walk_is_preorder() {
        let tree = ModelNode::new(SiteDefinition::default())
            .with_child(web("/a").with_child(web("/a/b")))
            .with_child(field("F"));

        let keys: Vec<_> = tree
            .walk()
            .skip(1)
            .filter_map(|n| n.definition().identity_key())
            .collect();
        assert_eq!(keys, vec!["/a", "/a/b", "F"]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.count_of(DefinitionKind::Web), 2);
    }

    #[test]
    fn find_child_by_kind_and_key() {
        let tree = ModelNode::new(SiteDefinition::default())
            .with_children([field("Status"), web("/Status")]);

        let found = tree.find_child(DefinitionKind::Web, "/Status").unwrap();
        assert_eq!(found.kind(), DefinitionKind::Web);
        assert!(tree.find_child(DefinitionKind::Field, "Missing").is_none());
    }

    #[test]
    fn options_builder() {
        let node = field("A").with_options(NodeOptions {
            require_self_processing: false,
        });
        assert!(!node.options().require_self_processing);
    }
}
