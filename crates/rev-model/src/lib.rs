//! REV Model
//!
//! Typed definitions and ordered model trees for reverse-engineered
//! configuration models.
//!
//! # Core Concepts
//!
//! - [`DefinitionKind`]: Stable type tag; the dispatch key for handlers and validators
//! - [`Definition`]: Typed, flat bag of optional properties for one remote entity
//! - [`PropertyValue`]: Readable property value with a canonical string form
//! - [`ModelNode`]: Ordered tree node owning one definition and its children
//! - [`KindRegistry`]: Kind-indexed registry, last registration wins
//!
//! # Example
//!
//! ```rust
//! use rev_model::{DefinitionKind, FieldDefinition, ModelNode, SiteDefinition};
//!
//! let site = ModelNode::new(SiteDefinition::default()).with_child(ModelNode::new(
//!     FieldDefinition {
//!         internal_name: Some("Status".to_string()),
//!         ..FieldDefinition::default()
//!     },
//! ));
//!
//! assert_eq!(site.count_of(DefinitionKind::Field), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod definition;
pub mod kind;
pub mod node;
pub mod registry;
pub mod value;

// Re-exports
pub use definition::{
    ContentTypeDefinition, Definition, FieldDefinition, HtmlFieldDefinition, ListDefinition,
    NoteFieldDefinition, SiteDefinition, WebDefinition,
};
pub use kind::{DefinitionKind, UnknownKind};
pub use node::{ModelNode, NodeOptions};
pub use registry::{KindKeyed, KindRegistry};
pub use value::PropertyValue;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
