//! Handler registry
//!
//! Provides [`HandlerRegistry`] for resolving the handler of a definition kind
//! and listing which handlers attach under a parent kind.

use crate::handler::ReverseHandler;
use crate::handlers::HandlerSet;
use rev_model::{DefinitionKind, KindRegistry};
use std::sync::Arc;

/// Registry of reverse handlers, keyed by the kind they reverse
///
/// When several handlers claim the same kind, the last one registered wins.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    inner: KindRegistry<dyn ReverseHandler>,
}

impl HandlerRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry with every built-in handler set
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_set(HandlerSet::Foundation);
        registry.register_set(HandlerSet::Standard);
        registry
    }

    /// Create registry from explicit handler sets
    #[must_use]
    pub fn with_sets(sets: impl IntoIterator<Item = HandlerSet>) -> Self {
        let mut registry = Self::new();
        for set in sets {
            registry.register_set(set);
        }
        registry
    }

    /// Register a handler
    pub fn register(&mut self, handler: Arc<dyn ReverseHandler>) {
        tracing::debug!("Registering {} reverse handler", handler.reverse_kind());
        self.inner.register(handler);
    }

    /// Register every handler of a set
    pub fn register_set(&mut self, set: HandlerSet) {
        for handler in set.handlers() {
            self.register(handler);
        }
    }

    /// Remove every handler (start of a targeted run)
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Resolve the handler for `kind`
    #[inline]
    #[must_use]
    pub fn resolve(&self, kind: DefinitionKind) -> Option<&Arc<dyn ReverseHandler>> {
        self.inner.resolve(kind)
    }

    /// Check if a handler serves `kind`
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: DefinitionKind) -> bool {
        self.inner.contains(kind)
    }

    /// Handlers that attach under `parent`, one per kind, in registration order
    #[must_use]
    pub fn child_handlers(&self, parent: DefinitionKind) -> Vec<Arc<dyn ReverseHandler>> {
        self.inner
            .effective()
            .filter(|h| h.attaches_to(parent))
            .cloned()
            .collect()
    }

    /// Kinds served, in first-registration order
    #[inline]
    #[must_use]
    pub fn kinds(&self) -> Vec<DefinitionKind> {
        self.inner.kinds()
    }

    /// Number of kinds served
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
