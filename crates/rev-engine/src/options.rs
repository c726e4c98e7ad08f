//! Reverse options

use rev_model::DefinitionKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable traversal settings, passed down the recursion unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseOptions {
    /// Kinds whose subtrees are skipped entirely
    pub excluded: BTreeSet<DefinitionKind>,
    /// When set, only these kinds are reversed below the root
    pub only: Option<BTreeSet<DefinitionKind>>,
    /// Nodes at this depth are emitted as leaves (root is depth 0)
    pub max_depth: Option<usize>,
}

impl ReverseOptions {
    /// Default options: everything registered, no depth limit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a kind
    #[inline]
    #[must_use]
    pub fn excluding(mut self, kind: DefinitionKind) -> Self {
        self.excluded.insert(kind);
        self
    }

    /// Restrict traversal to the given kinds
    #[must_use]
    pub fn only(mut self, kinds: impl IntoIterator<Item = DefinitionKind>) -> Self {
        self.only = Some(kinds.into_iter().collect());
        self
    }

    /// Limit traversal depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether the subtree of `kind` must be skipped
    #[must_use]
    pub fn is_excluded(&self, kind: DefinitionKind) -> bool {
        self.excluded.contains(&kind)
            || self.only.as_ref().is_some_and(|only| !only.contains(&kind))
    }

    /// Whether nodes at `depth` may not get children
    #[inline]
    #[must_use]
    pub fn is_depth_limit(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
