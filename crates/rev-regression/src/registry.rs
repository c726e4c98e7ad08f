//! Validator registry

use crate::validator::DefinitionValidator;
use crate::validators::ValidatorSet;
use rev_model::{DefinitionKind, KindRegistry};
use std::sync::Arc;

/// Registry of definition validators, keyed by target kind
///
/// Shares its precedence rule with the handler registry: last registration wins.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    inner: KindRegistry<dyn DefinitionValidator>,
}

impl ValidatorRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry with every built-in validator
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::with_sets([ValidatorSet::Foundation, ValidatorSet::Standard])
    }

    /// Create registry from explicit validator sets
    #[must_use]
    pub fn with_sets(sets: impl IntoIterator<Item = ValidatorSet>) -> Self {
        let mut registry = Self::new();
        for set in sets {
            registry.register_set(set);
        }
        registry
    }

    /// Register a validator
    pub fn register(&mut self, validator: Arc<dyn DefinitionValidator>) {
        tracing::debug!("Registering {} validator", validator.target_kind());
        self.inner.register(validator);
    }

    /// Register every validator of a set
    pub fn register_set(&mut self, set: ValidatorSet) {
        for validator in set.validators() {
            self.register(validator);
        }
    }

    /// Remove every validator
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Remove validators for `kind`, returns how many were removed
    #[inline]
    pub fn remove(&mut self, kind: DefinitionKind) -> usize {
        self.inner.remove(kind)
    }

    /// Resolve the validator for `kind`
    #[inline]
    #[must_use]
    pub fn resolve(&self, kind: DefinitionKind) -> Option<&Arc<dyn DefinitionValidator>> {
        self.inner.resolve(kind)
    }

    /// Check if a validator targets `kind`
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: DefinitionKind) -> bool {
        self.inner.contains(kind)
    }

    /// Number of kinds covered
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::FieldDefinitionValidator;

    #[test]
    fn defaults_cover_builtin_kinds() {
        let registry = ValidatorRegistry::with_defaults();
        assert_eq!(registry.len(), 7);
        assert!(registry.contains(DefinitionKind::ContentType));
    }

    #[test]
    fn remove_and_clear() {
        let mut registry = ValidatorRegistry::with_defaults();
        assert_eq!(registry.remove(DefinitionKind::Web), 1);
        assert!(!registry.contains(DefinitionKind::Web));

        registry.clear();
        assert!(registry.is_empty());

        registry.register(Arc::new(FieldDefinitionValidator::html()));
        assert!(registry.resolve(DefinitionKind::HtmlField).is_some());
    }
}
