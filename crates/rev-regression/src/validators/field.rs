//! Field validators
//!
//! One validator type covers every field variant: the base field properties
//! are always compared, note fields add their own.

use crate::assert::ModelAssert;
use crate::error::ValidationError;
use crate::record::PropertyValidationResult;
use crate::validator::DefinitionValidator;
use rev_model::{Definition, DefinitionKind, FieldDefinition};

/// Compares field definitions of one variant
#[derive(Debug, Clone, Copy)]
pub struct FieldDefinitionValidator {
    kind: DefinitionKind,
}

impl FieldDefinitionValidator {
    /// Validator for base fields
    #[inline]
    #[must_use]
    pub fn base() -> Self {
        Self {
            kind: DefinitionKind::Field,
        }
    }

    /// Validator for note fields
    #[inline]
    #[must_use]
    pub fn note() -> Self {
        Self {
            kind: DefinitionKind::NoteField,
        }
    }

    /// Validator for HTML fields
    #[inline]
    #[must_use]
    pub fn html() -> Self {
        Self {
            kind: DefinitionKind::HtmlField,
        }
    }
}

fn base_field_records(src: &FieldDefinition, dst: &FieldDefinition) -> Vec<PropertyValidationResult> {
    ModelAssert::new(src, dst)
        .should_be_equal("title", |s| s.title.clone(), |d| d.title.clone())
        .should_be_equal("internal_name", |s| s.internal_name.clone(), |d| d.internal_name.clone())
        .should_be_equal("description", |s| s.description.clone(), |d| d.description.clone())
        .should_be_equal("id", |s| s.id, |d| d.id)
        .should_be_equal("group", |s| s.group.clone(), |d| d.group.clone())
        .should_be_equal("default_value", |s| s.default_value.clone(), |d| d.default_value.clone())
        .should_be_equal("required", |s| s.required, |d| d.required)
        .should_be_equal("field_type", |s| s.field_type.clone(), |d| d.field_type.clone())
        .finish()
}

impl DefinitionValidator for FieldDefinitionValidator {
    fn target_kind(&self) -> DefinitionKind {
        self.kind
    }

    fn validate(
        &self,
        original: &Definition,
        reversed: &Definition,
    ) -> Result<Vec<PropertyValidationResult>, ValidationError> {
        if original.kind() != self.kind || reversed.kind() != self.kind {
            return Err(self.mismatch(original, reversed));
        }
        let (Some(src), Some(dst)) = (original.as_field(), reversed.as_field()) else {
            return Err(self.mismatch(original, reversed));
        };

        let mut records = base_field_records(src, dst);

        if let (Definition::NoteField(src), Definition::NoteField(dst)) = (original, reversed) {
            records.extend(
                ModelAssert::new(src, dst)
                    .should_be_equal("number_of_lines", |s| s.number_of_lines, |d| d.number_of_lines)
                    .should_be_equal("rich_text", |s| s.rich_text, |d| d.rich_text)
                    .finish(),
            );
        }

        Ok(records)
    }
}
