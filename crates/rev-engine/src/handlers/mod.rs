//! Built-in reverse handlers
//!
//! Handlers are grouped into [`HandlerSet`]s; a registry can be filled with
//! one or more sets, or cleared and given an explicit list.

mod content_type;
mod field;
mod list;
mod site;
mod web;

pub use content_type::ContentTypeReverseHandler;
pub use field::{
    read_base_field, FieldReverseHandler, FieldVariant, HTML_FIELD_TYPE, NOTE_FIELD_TYPE,
};
pub use list::ListReverseHandler;
pub use site::SiteReverseHandler;
pub use web::WebReverseHandler;

use crate::handler::ReverseHandler;
use rev_model::DefinitionKind;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Named group of built-in handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerSet {
    /// Site, web, list, field, note field and content type handlers
    Foundation,
    /// Publishing handlers (HTML field)
    Standard,
}

impl HandlerSet {
    /// Handlers in this set, in registration order
    #[must_use]
    pub fn handlers(&self) -> Vec<Arc<dyn ReverseHandler>> {
        match self {
            Self::Foundation => vec![
                Arc::new(SiteReverseHandler),
                Arc::new(WebReverseHandler),
                Arc::new(ListReverseHandler),
                Arc::new(FieldReverseHandler::base()),
                Arc::new(FieldReverseHandler::note()),
                Arc::new(ContentTypeReverseHandler),
            ],
            Self::Standard => vec![Arc::new(FieldReverseHandler::html())],
        }
    }
}

/// Built-in handler for one kind, if any
#[must_use]
pub fn builtin_handler(kind: DefinitionKind) -> Option<Arc<dyn ReverseHandler>> {
    [HandlerSet::Foundation, HandlerSet::Standard]
        .iter()
        .flat_map(HandlerSet::handlers)
        .find(|h| h.reverse_kind() == kind)
}
