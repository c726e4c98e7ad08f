//! Content type validator

use crate::assert::ModelAssert;
use crate::error::ValidationError;
use crate::record::PropertyValidationResult;
use crate::validator::DefinitionValidator;
use rev_model::{Definition, DefinitionKind};

/// Compares content type definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeDefinitionValidator;

impl DefinitionValidator for ContentTypeDefinitionValidator {
    fn target_kind(&self) -> DefinitionKind {
        DefinitionKind::ContentType
    }

    fn validate(
        &self,
        original: &Definition,
        reversed: &Definition,
    ) -> Result<Vec<PropertyValidationResult>, ValidationError> {
        let (Definition::ContentType(src), Definition::ContentType(dst)) = (original, reversed)
        else {
            return Err(self.mismatch(original, reversed));
        };

        Ok(ModelAssert::new(src, dst)
            .should_be_equal("id", |s| s.id.clone(), |d| d.id.clone())
            .should_be_equal("name", |s| s.name.clone(), |d| d.name.clone())
            .should_be_equal("description", |s| s.description.clone(), |d| d.description.clone())
            .should_be_equal("group", |s| s.group.clone(), |d| d.group.clone())
            .finish())
    }
}
