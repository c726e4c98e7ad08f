//! Site validator

use crate::assert::ModelAssert;
use crate::error::ValidationError;
use crate::record::PropertyValidationResult;
use crate::validator::DefinitionValidator;
use rev_model::{Definition, DefinitionKind};

/// Compares site definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteDefinitionValidator;

impl DefinitionValidator for SiteDefinitionValidator {
    fn target_kind(&self) -> DefinitionKind {
        DefinitionKind::Site
    }

    fn validate(
        &self,
        original: &Definition,
        reversed: &Definition,
    ) -> Result<Vec<PropertyValidationResult>, ValidationError> {
        let (Definition::Site(src), Definition::Site(dst)) = (original, reversed) else {
            return Err(self.mismatch(original, reversed));
        };

        Ok(ModelAssert::new(src, dst)
            .should_be_equal("url", |s| s.url.clone(), |d| d.url.clone())
            .should_be_equal("id", |s| s.id, |d| d.id)
            .finish())
    }
}
