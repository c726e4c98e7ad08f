//! Built-in definition validators
//!
//! Grouped into [`ValidatorSet`]s matching the handler sets of the engine.

mod content_type;
mod field;
mod list;
mod site;
mod web;

pub use content_type::ContentTypeDefinitionValidator;
pub use field::FieldDefinitionValidator;
pub use list::ListDefinitionValidator;
pub use site::SiteDefinitionValidator;
pub use web::WebDefinitionValidator;

use crate::validator::DefinitionValidator;
use serde::Serialize;
use std::sync::Arc;

/// Named group of built-in validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorSet {
    /// Site, web, list, field, note field and content type validators
    Foundation,
    /// Publishing validators (HTML field)
    Standard,
}

impl ValidatorSet {
    /// Validators in this set, in registration order
    #[must_use]
    pub fn validators(&self) -> Vec<Arc<dyn DefinitionValidator>> {
        match self {
            Self::Foundation => vec![
                Arc::new(SiteDefinitionValidator),
                Arc::new(WebDefinitionValidator),
                Arc::new(ListDefinitionValidator),
                Arc::new(FieldDefinitionValidator::base()),
                Arc::new(FieldDefinitionValidator::note()),
                Arc::new(ContentTypeDefinitionValidator),
            ],
            Self::Standard => vec![Arc::new(FieldDefinitionValidator::html())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rev_model::DefinitionKind;

    #[test]
    fn sets_cover_distinct_kinds() {
        let kinds: Vec<_> = [ValidatorSet::Foundation, ValidatorSet::Standard]
            .iter()
            .flat_map(ValidatorSet::validators)
            .map(|v| v.target_kind())
            .collect();

        assert_eq!(kinds.len(), 7);
        assert!(kinds.contains(&DefinitionKind::HtmlField));
        assert!(!kinds.contains(&DefinitionKind::Farm));
    }
}
