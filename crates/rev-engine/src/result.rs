//! Reverse results and warnings

use crate::error::HostChain;
use crate::remote::Collection;
use rev_model::{DefinitionKind, ModelNode};
use std::fmt;

/// Non-fatal observation collected during a traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReverseWarning {
    /// The remote carries a collection nobody can reverse yet
    CoverageGap {
        /// Remote collection that was skipped
        collection: Collection,
        /// Model kind of the collection, if the model has one
        kind: Option<DefinitionKind>,
        /// Host the collection was found under
        chain: HostChain,
    },

    /// Children were not enumerated because of the depth limit
    DepthLimitReached {
        /// Host emitted as a leaf
        chain: HostChain,
        /// Configured limit
        max_depth: usize,
    },
}

impl ReverseWarning {
    /// Whether this warning is a coverage gap
    #[inline]
    #[must_use]
    pub fn is_coverage_gap(&self) -> bool {
        matches!(self, Self::CoverageGap { .. })
    }
}

impl fmt::Display for ReverseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoverageGap {
                collection,
                kind: Some(kind),
                chain,
            } => write!(f, "no handler for {kind} ({collection}) under {chain}"),
            Self::CoverageGap {
                collection,
                kind: None,
                chain,
            } => write!(f, "unmodelled collection {collection} under {chain}"),
            Self::DepthLimitReached { chain, max_depth } => {
                write!(f, "depth limit {max_depth} reached at {chain}")
            }
        }
    }
}

/// Output of one traversal
#[derive(Debug, Clone)]
pub struct ReverseResult {
    /// Assembled model tree
    pub model: ModelNode,
    /// Non-fatal warnings, in discovery order
    pub warnings: Vec<ReverseWarning>,
}

impl ReverseResult {
    /// Coverage gaps recorded during the traversal
    pub fn coverage_gaps(&self) -> impl Iterator<Item = &ReverseWarning> {
        self.warnings.iter().filter(|w| w.is_coverage_gap())
    }

    /// Whether any coverage gap was recorded
    #[must_use]
    pub fn has_coverage_gaps(&self) -> bool {
        self.coverage_gaps().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteHandle;
    use rev_model::SiteDefinition;

    fn chain() -> HostChain {
        HostChain(vec![(DefinitionKind::Site, RemoteHandle::new("s1"))])
    }

    #[test]
    fn warning_display() {
        let gap = ReverseWarning::CoverageGap {
            collection: Collection::Features,
            kind: None,
            chain: chain(),
        };
        assert_eq!(gap.to_string(), "unmodelled collection features under site(s1)");

        let missing = ReverseWarning::CoverageGap {
            collection: Collection::Lists,
            kind: Some(DefinitionKind::List),
            chain: chain(),
        };
        assert_eq!(missing.to_string(), "no handler for list (lists) under site(s1)");
    }

    #[test]
    fn result_gaps() {
        let result = ReverseResult {
            model: ModelNode::new(SiteDefinition::default()),
            warnings: vec![ReverseWarning::DepthLimitReached {
                chain: chain(),
                max_depth: 0,
            }],
        };
        assert!(!result.has_coverage_gaps());
    }
}
