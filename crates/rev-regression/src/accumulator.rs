//! Validation accumulator
//!
//! Single-writer append log of model validation results for one run. Passed
//! explicitly through the validation call chain; [`ValidationAccumulator::start_new_run`]
//! is the reset point between runs.

use crate::record::{ModelValidationResult, PropertyValidationResult, UnvalidatedMarker};
use rev_model::{DefinitionKind, ModelNode};
use std::collections::HashSet;

/// Ordered log of validation results for the current run
#[derive(Debug, Clone, Default)]
pub struct ValidationAccumulator {
    run: u64,
    results: Vec<ModelValidationResult>,
    unvalidated: Vec<UnvalidatedMarker>,
}

impl ValidationAccumulator {
    /// Create empty accumulator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far and start a new run
    pub fn start_new_run(&mut self) {
        self.run += 1;
        self.results.clear();
        self.unvalidated.clear();
        tracing::debug!("Validation run {} started", self.run);
    }

    /// Number of runs started on this accumulator
    #[inline]
    #[must_use]
    pub fn run(&self) -> u64 {
        self.run
    }

    /// Append a model validation result
    pub fn record(&mut self, result: ModelValidationResult) {
        self.results.push(result);
    }

    /// Append a coverage hole marker
    pub fn mark_unvalidated(&mut self, kind: DefinitionKind, identity_key: Option<&str>) {
        self.unvalidated.push(UnvalidatedMarker {
            kind,
            identity_key: identity_key.map(str::to_string),
        });
    }

    /// Results in append order
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[ModelValidationResult] {
        &self.results
    }

    /// Nodes skipped for lack of a validator
    #[inline]
    #[must_use]
    pub fn unvalidated(&self) -> &[UnvalidatedMarker] {
        &self.unvalidated
    }

    /// Check if any recorded property is invalid
    #[must_use]
    pub fn has_invalid_properties(&self) -> bool {
        self.results.iter().any(|r| !r.is_valid())
    }

    /// Check if any node went unvalidated
    #[inline]
    #[must_use]
    pub fn has_coverage_gaps(&self) -> bool {
        !self.unvalidated.is_empty()
    }

    /// Invalid records with the kind they belong to
    pub fn invalid_properties(
        &self,
    ) -> impl Iterator<Item = (DefinitionKind, &PropertyValidationResult)> {
        self.results
            .iter()
            .flat_map(|r| r.invalid_properties().map(move |p| (r.kind(), p)))
    }

    /// Check whether any node of `model` was missed or has invalid properties
    ///
    /// Only results belonging to nodes of `model` (matched by kind and
    /// identity key) are considered.
    #[must_use]
    pub fn resolve_model_validation(&self, model: &ModelNode) -> bool {
        let nodes: HashSet<(DefinitionKind, Option<&str>)> = model
            .walk()
            .map(|n| (n.kind(), n.definition().identity_key()))
            .collect();

        let invalid = self
            .results
            .iter()
            .filter(|r| nodes.contains(&(r.kind(), r.identity_key())))
            .any(|r| !r.is_valid());
        let missed = self
            .unvalidated
            .iter()
            .any(|m| nodes.contains(&(m.kind, m.identity_key.as_deref())));

        invalid || missed
    }

    /// Consume the accumulator, returning its results
    #[must_use]
    pub fn into_results(self) -> Vec<ModelValidationResult> {
        self.results
    }
}
