//! Web validator

use crate::assert::ModelAssert;
use crate::error::ValidationError;
use crate::record::PropertyValidationResult;
use crate::validator::DefinitionValidator;
use rev_model::{Definition, DefinitionKind};

/// Compares web definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDefinitionValidator;

impl DefinitionValidator for WebDefinitionValidator {
    fn target_kind(&self) -> DefinitionKind {
        DefinitionKind::Web
    }

    fn validate(
        &self,
        original: &Definition,
        reversed: &Definition,
    ) -> Result<Vec<PropertyValidationResult>, ValidationError> {
        let (Definition::Web(src), Definition::Web(dst)) = (original, reversed) else {
            return Err(self.mismatch(original, reversed));
        };

        Ok(ModelAssert::new(src, dst)
            .should_be_equal("title", |s| s.title.clone(), |d| d.title.clone())
            .should_be_equal("description", |s| s.description.clone(), |d| d.description.clone())
            .should_be_equal("url", |s| s.url.clone(), |d| d.url.clone())
            .should_be_equal("web_template", |s| s.web_template.clone(), |d| d.web_template.clone())
            .should_be_equal("lcid", |s| s.lcid, |d| d.lcid)
            .finish())
    }
}
