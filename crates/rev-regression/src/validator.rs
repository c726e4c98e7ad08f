//! Definition validator trait

use crate::error::ValidationError;
use crate::record::PropertyValidationResult;
use rev_model::{Definition, DefinitionKind, KindKeyed};
use std::fmt;

/// Type-specific strategy comparing two definitions property by property
///
/// Implementations are declarative: they list property pairs on a
/// [`ModelAssert`](crate::ModelAssert) chain and never raise on mismatches.
pub trait DefinitionValidator: Send + Sync + fmt::Debug {
    /// Definition kind this validator compares
    fn target_kind(&self) -> DefinitionKind;

    /// Compare an original definition with its reversed counterpart
    ///
    /// # Errors
    /// Returns `DefinitionMismatch` if either side is not of the target kind
    fn validate(
        &self,
        original: &Definition,
        reversed: &Definition,
    ) -> Result<Vec<PropertyValidationResult>, ValidationError>;

    /// Mismatch error for a definition pair this validator cannot handle
    fn mismatch(&self, original: &Definition, reversed: &Definition) -> ValidationError {
        ValidationError::definition_mismatch(self.target_kind(), original.kind(), reversed.kind())
    }
}

impl KindKeyed for dyn DefinitionValidator {
    fn key_kind(&self) -> DefinitionKind {
        self.target_kind()
    }
}
