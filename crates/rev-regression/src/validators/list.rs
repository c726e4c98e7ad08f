//! List validator

use crate::assert::ModelAssert;
use crate::error::ValidationError;
use crate::record::PropertyValidationResult;
use crate::validator::DefinitionValidator;
use rev_model::{Definition, DefinitionKind};

/// Compares list definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct ListDefinitionValidator;

impl DefinitionValidator for ListDefinitionValidator {
    fn target_kind(&self) -> DefinitionKind {
        DefinitionKind::List
    }

    fn validate(
        &self,
        original: &Definition,
        reversed: &Definition,
    ) -> Result<Vec<PropertyValidationResult>, ValidationError> {
        let (Definition::List(src), Definition::List(dst)) = (original, reversed) else {
            return Err(self.mismatch(original, reversed));
        };

        Ok(ModelAssert::new(src, dst)
            .should_be_equal("title", |s| s.title.clone(), |d| d.title.clone())
            .should_be_equal("description", |s| s.description.clone(), |d| d.description.clone())
            .should_be_equal("url", |s| s.url.clone(), |d| d.url.clone())
            .should_be_equal("template_type", |s| s.template_type, |d| d.template_type)
            .should_be_equal(
                "content_types_enabled",
                |s| s.content_types_enabled,
                |d| d.content_types_enabled,
            )
            .finish())
    }
}
