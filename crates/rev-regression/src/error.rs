//! Error types for reverse validation
//!
//! Property mismatches are data and never surface here; they are recorded in
//! the accumulator. Only structural disagreements escalate.

use rev_model::DefinitionKind;

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Original and reversed roots are different kinds
    #[error("type mismatch: original model is {original}, reversed model is {reversed}")]
    TypeMismatch {
        /// Original root kind
        original: DefinitionKind,
        /// Reversed root kind
        reversed: DefinitionKind,
    },

    /// Validator handed a definition pair it does not target
    #[error("{validator} validator cannot validate {original} against {reversed}")]
    DefinitionMismatch {
        /// Kind the validator targets
        validator: DefinitionKind,
        /// Original definition kind
        original: DefinitionKind,
        /// Reversed definition kind
        reversed: DefinitionKind,
    },
}

impl ValidationError {
    /// Create a root type mismatch
    #[inline]
    #[must_use]
    pub fn type_mismatch(original: DefinitionKind, reversed: DefinitionKind) -> Self {
        Self::TypeMismatch { original, reversed }
    }

    /// Create a validator/definition mismatch
    #[inline]
    #[must_use]
    pub fn definition_mismatch(
        validator: DefinitionKind,
        original: DefinitionKind,
        reversed: DefinitionKind,
    ) -> Self {
        Self::DefinitionMismatch {
            validator,
            original,
            reversed,
        }
    }

    /// Check if error is structural (always escalates)
    #[inline]
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::DefinitionMismatch { .. })
    }
}
