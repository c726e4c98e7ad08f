//! Kind-indexed registry
//!
//! Provides [`KindRegistry`], the single dispatch table shared by reverse
//! handlers and definition validators. Entries are kept in registration
//! order; when two entries claim the same kind, the one registered last wins.

use crate::kind::DefinitionKind;
use std::fmt;
use std::sync::Arc;

/// Anything that declares the definition kind it serves
pub trait KindKeyed {
    /// Kind this entry is registered under
    fn key_kind(&self) -> DefinitionKind;
}

/// Registry of entries keyed by [`DefinitionKind`]
///
/// Not a process-wide singleton: every run owns its registry, and
/// [`KindRegistry::clear`] is the reset point for targeted runs.
pub struct KindRegistry<T: ?Sized> {
    entries: Vec<Arc<T>>,
}

impl<T: ?Sized + KindKeyed> KindRegistry<T> {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an entry; a later registration for the same kind takes precedence
    pub fn register(&mut self, entry: Arc<T>) {
        self.entries.push(entry);
    }

    /// Remove every entry
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove every entry registered for `kind`, returning how many were dropped
    pub fn remove(&mut self, kind: DefinitionKind) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key_kind() != kind);
        before - self.entries.len()
    }

    /// Resolve the effective entry for `kind` (last registered wins)
    #[must_use]
    pub fn resolve(&self, kind: DefinitionKind) -> Option<&Arc<T>> {
        self.entries.iter().rev().find(|e| e.key_kind() == kind)
    }

    /// Check if any entry serves `kind`
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: DefinitionKind) -> bool {
        self.resolve(kind).is_some()
    }

    /// Distinct kinds in first-registration order
    #[must_use]
    pub fn kinds(&self) -> Vec<DefinitionKind> {
        let mut kinds = Vec::new();
        for entry in &self.entries {
            let kind = entry.key_kind();
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Effective entries, one per kind, in first-registration order of the kind
    pub fn effective(&self) -> impl Iterator<Item = &Arc<T>> {
        self.kinds().into_iter().filter_map(move |k| self.resolve(k))
    }

    /// Number of distinct kinds served
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds().len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized + KindKeyed> Default for KindRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for KindRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: ?Sized + KindKeyed> fmt::Debug for KindRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.key_kind()))
            .finish()
    }
}
