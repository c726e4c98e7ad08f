//! Reverse validation service
//!
//! Walks the original tree and pairs every original node with the reversed
//! node of the same kind and identity key. Each reversed node pairs at most
//! once: the nth original sibling with a given key pairs with the nth reversed
//! sibling with that key, and keyless siblings pair by ordinal. Reversed nodes
//! without an original counterpart are ignored; the remote always carries
//! built-in entities the original never declared.

use crate::accumulator::ValidationAccumulator;
use crate::error::ValidationError;
use crate::record::{ModelValidationResult, PropertyValidationResult};
use crate::registry::ValidatorRegistry;
use rev_model::ModelNode;

/// Compares an original model tree against its reversed counterpart
#[derive(Debug, Clone, Default)]
pub struct ReverseValidationService {
    registry: ValidatorRegistry,
}

impl ReverseValidationService {
    /// Create service over a validator registry
    #[inline]
    #[must_use]
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self { registry }
    }

    /// Create service with every built-in validator
    #[inline]
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ValidatorRegistry::with_defaults())
    }

    /// Validator registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Mutable validator registry
    #[inline]
    pub fn registry_mut(&mut self) -> &mut ValidatorRegistry {
        &mut self.registry
    }

    /// Validate into a fresh accumulator
    ///
    /// # Errors
    /// See [`ReverseValidationService::validate_into`]
    pub fn validate(
        &self,
        original: &ModelNode,
        reversed: &ModelNode,
    ) -> Result<ValidationAccumulator, ValidationError> {
        let mut acc = ValidationAccumulator::new();
        acc.start_new_run();
        self.validate_into(original, reversed, &mut acc)?;
        Ok(acc)
    }

    /// Validate `reversed` against `original`, appending to `acc`
    ///
    /// Property mismatches are recorded, never raised.
    ///
    /// # Errors
    /// - `TypeMismatch` if the two roots are different kinds
    /// - `DefinitionMismatch` if a validator is registered under the wrong kind
    pub fn validate_into(
        &self,
        original: &ModelNode,
        reversed: &ModelNode,
        acc: &mut ValidationAccumulator,
    ) -> Result<(), ValidationError> {
        if original.kind() != reversed.kind() {
            return Err(ValidationError::type_mismatch(original.kind(), reversed.kind()));
        }

        tracing::info!("Validating reversed {} model", original.kind());
        let before = acc.results().len();

        self.validate_pair(original, reversed, acc)?;

        let validated = acc.results().len() - before;
        if acc.has_invalid_properties() {
            tracing::warn!("Validated {} nodes, invalid properties found", validated);
        } else {
            tracing::info!("Validated {} nodes", validated);
        }
        Ok(())
    }

    fn validate_pair(
        &self,
        original: &ModelNode,
        reversed: &ModelNode,
        acc: &mut ValidationAccumulator,
    ) -> Result<(), ValidationError> {
        let kind = original.kind();
        let key = original.definition().identity_key();

        let Some(validator) = self.registry.resolve(kind) else {
            tracing::warn!("No validator for {} '{}'", kind, key.unwrap_or_default());
            acc.mark_unvalidated(kind, key);
            return Ok(());
        };

        let properties = validator.validate(original.definition(), reversed.definition())?;
        acc.record(ModelValidationResult::new(
            original.definition().clone(),
            properties,
        ));

        for (child, counterpart) in pair_children(original, reversed) {
            match counterpart {
                Some(counterpart) => self.validate_pair(child, counterpart, acc)?,
                None => {
                    let child_key = child.definition().identity_key();
                    tracing::debug!(
                        "No reversed {} '{}'",
                        child.kind(),
                        child_key.unwrap_or_default()
                    );
                    acc.record(ModelValidationResult::new(
                        child.definition().clone(),
                        vec![PropertyValidationResult::missing_counterpart(
                            child.kind(),
                            child_key,
                        )],
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Pair each original child with an unconsumed reversed child of the same
/// kind and identity key, in sibling order
fn pair_children<'o, 'r>(
    original: &'o ModelNode,
    reversed: &'r ModelNode,
) -> Vec<(&'o ModelNode, Option<&'r ModelNode>)> {
    let mut consumed = vec![false; reversed.children().len()];

    original
        .children()
        .iter()
        .map(|child| {
            let key = child.definition().identity_key();
            let found = reversed.children().iter().enumerate().find(|(i, candidate)| {
                !consumed[*i]
                    && candidate.kind() == child.kind()
                    && candidate.definition().identity_key() == key
            });
            let counterpart = found.map(|(i, candidate)| {
                consumed[i] = true;
                candidate
            });
            (child, counterpart)
        })
        .collect()
}
