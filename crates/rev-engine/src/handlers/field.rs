//! Field handlers
//!
//! One handler type serves every field variant. A [`FieldVariant`] injects the
//! three things that differ between variants: the child-query filter, the
//! definition factory and a post-process hook. Attachment rules and the
//! base property mapping are shared.

use crate::error::ReverseError;
use crate::handler::{inherit_all, reversed_node, ReverseHandler};
use crate::host::ReverseHost;
use crate::options::ReverseOptions;
use crate::remote::{Collection, RemoteClient, RemoteEntity, RemoteQuery, TYPE_AS_STRING};
use rev_model::{
    Definition, DefinitionKind, FieldDefinition, HtmlFieldDefinition, ModelNode,
    NoteFieldDefinition,
};
use std::fmt;
use std::sync::Arc;

/// Remote type name of multi-line text fields
pub const NOTE_FIELD_TYPE: &str = "Note";

/// Remote type name of publishing HTML fields
pub const HTML_FIELD_TYPE: &str = "HTML";

const FIELD_PARENTS: &[DefinitionKind] = &[DefinitionKind::Site];

/// Strategies that specialise the base field handler
#[derive(Clone, Copy)]
pub struct FieldVariant {
    /// Kind produced by this variant
    pub kind: DefinitionKind,
    /// Remote `TypeAsString` to filter children by; `None` takes every field
    pub type_filter: Option<&'static str>,
    /// Builds the variant definition from the base field properties
    pub factory: fn(FieldDefinition) -> Definition,
    /// Fills variant-specific properties from the remote entity
    pub post_process: fn(&mut Definition, &RemoteEntity, &ReverseOptions),
}

impl fmt::Debug for FieldVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldVariant")
            .field("kind", &self.kind)
            .field("type_filter", &self.type_filter)
            .finish_non_exhaustive()
    }
}

fn no_post_process(_: &mut Definition, _: &RemoteEntity, _: &ReverseOptions) {}

fn note_post_process(def: &mut Definition, entity: &RemoteEntity, _: &ReverseOptions) {
    if let Definition::NoteField(note) = def {
        note.number_of_lines = entity.uint("NumberOfLines");
        note.rich_text = entity.flag("RichText");
    }
}

impl FieldVariant {
    /// Every field, reversed as a base field definition
    #[must_use]
    pub fn base() -> Self {
        Self {
            kind: DefinitionKind::Field,
            type_filter: None,
            factory: Definition::Field,
            post_process: no_post_process,
        }
    }

    /// Multi-line text fields
    #[must_use]
    pub fn note() -> Self {
        Self {
            kind: DefinitionKind::NoteField,
            type_filter: Some(NOTE_FIELD_TYPE),
            factory: |field| {
                Definition::NoteField(NoteFieldDefinition {
                    field,
                    ..NoteFieldDefinition::default()
                })
            },
            post_process: note_post_process,
        }
    }

    /// Publishing HTML fields
    #[must_use]
    pub fn html() -> Self {
        Self {
            kind: DefinitionKind::HtmlField,
            type_filter: Some(HTML_FIELD_TYPE),
            factory: |field| Definition::HtmlField(HtmlFieldDefinition { field }),
            post_process: no_post_process,
        }
    }

    fn query(&self) -> RemoteQuery {
        match self.type_filter {
            Some(type_name) => RemoteQuery::of_type(type_name),
            None => RemoteQuery::all(),
        }
    }
}

/// Reverses site fields into field definitions of one variant
#[derive(Debug, Clone, Copy)]
pub struct FieldReverseHandler {
    variant: FieldVariant,
}

impl FieldReverseHandler {
    /// Create handler for a variant
    #[inline]
    #[must_use]
    pub fn new(variant: FieldVariant) -> Self {
        Self { variant }
    }

    /// Base field handler
    #[inline]
    #[must_use]
    pub fn base() -> Self {
        Self::new(FieldVariant::base())
    }

    /// Note field handler
    #[inline]
    #[must_use]
    pub fn note() -> Self {
        Self::new(FieldVariant::note())
    }

    /// HTML field handler
    #[inline]
    #[must_use]
    pub fn html() -> Self {
        Self::new(FieldVariant::html())
    }

    /// Injected variant strategies
    #[inline]
    #[must_use]
    pub fn variant(&self) -> &FieldVariant {
        &self.variant
    }
}

/// Map the base field properties shared by all variants
#[must_use]
pub fn read_base_field(entity: &RemoteEntity) -> FieldDefinition {
    FieldDefinition {
        id: entity.guid("Id"),
        title: entity.text("Title"),
        internal_name: entity.text("InternalName"),
        description: entity.text("Description"),
        group: entity.text("Group"),
        default_value: entity.text("DefaultValue"),
        required: entity.flag("Required"),
        field_type: entity.text(TYPE_AS_STRING),
    }
}

impl ReverseHandler for FieldReverseHandler {
    fn reverse_kind(&self) -> DefinitionKind {
        self.variant.kind
    }

    fn parent_kinds(&self) -> &[DefinitionKind] {
        FIELD_PARENTS
    }

    fn reverse_hosts(
        &self,
        remote: &dyn RemoteClient,
        parent: &Arc<ReverseHost>,
        _options: &ReverseOptions,
    ) -> Result<Vec<Arc<ReverseHost>>, ReverseError> {
        self.ensure_parent(parent)?;

        let site = parent.scope().site().unwrap_or_else(|| parent.handle());
        let handles = remote.children(site, Collection::Fields, &self.variant.query())?;

        Ok(inherit_all(parent, self.variant.kind, handles))
    }

    fn reverse_single_host(
        &self,
        remote: &dyn RemoteClient,
        host: &ReverseHost,
        options: &ReverseOptions,
    ) -> Result<ModelNode, ReverseError> {
        self.ensure_own(host)?;

        let entity = remote.read(host.handle())?;
        let mut def = (self.variant.factory)(read_base_field(&entity));
        (self.variant.post_process)(&mut def, &entity, options);

        Ok(reversed_node(def))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteHandle;
    use crate::snapshot::{RemoteNode, SnapshotRemote};

    fn remote() -> SnapshotRemote {
        let site = RemoteNode::new("site")
            .with_child(
                Collection::Fields,
                RemoteNode::new("f-title")
                    .with_property("InternalName", "Title")
                    .with_property("Title", "Title")
                    .with_property("TypeAsString", "Text")
                    .with_property("Required", true)
                    .with_property("Id", "fa564e0f-0c70-4ab9-b863-0177e6ddd247"),
            )
            .with_child(
                Collection::Fields,
                RemoteNode::new("f-notes")
                    .with_property("InternalName", "Notes")
                    .with_property("TypeAsString", "Note")
                    .with_property("NumberOfLines", 6)
                    .with_property("RichText", false),
            )
            .with_child(
                Collection::Fields,
                RemoteNode::new("f-body")
                    .with_property("InternalName", "PublishingPageContent")
                    .with_property("TypeAsString", "HTML"),
            )
            .with_child(Collection::Webs, RemoteNode::new("web"));
        SnapshotRemote::new(site).unwrap()
    }

    fn site_host() -> Arc<ReverseHost> {
        ReverseHost::root(DefinitionKind::Site, RemoteHandle::new("site"))
    }

    #[test]
    fn base_enumerates_all_fields_in_order() {
        let remote = remote();
        let hosts = FieldReverseHandler::base()
            .reverse_hosts(&remote, &site_host(), &ReverseOptions::default())
            .unwrap();

        let ids: Vec<_> = hosts.iter().map(|h| h.handle().as_str()).collect();
        assert_eq!(ids, vec!["f-title", "f-notes", "f-body"]);
        assert!(hosts.iter().all(|h| h.kind() == DefinitionKind::Field));
        assert!(hosts.iter().all(|h| h.parent().is_some()));
    }

    #[test]
    fn variant_filters_by_type() {
        let remote = remote();
        let hosts = FieldReverseHandler::html()
            .reverse_hosts(&remote, &site_host(), &ReverseOptions::default())
            .unwrap();

        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].handle().as_str(), "f-body");
        assert_eq!(hosts[0].kind(), DefinitionKind::HtmlField);
    }

    #[test]
    fn base_conversion_maps_properties() {
        let remote = remote();
        let handler = FieldReverseHandler::base();
        let host = ReverseHost::inherit(&site_host(), DefinitionKind::Field, "f-title".into());

        let node = handler
            .reverse_single_host(&remote, &host, &ReverseOptions::default())
            .unwrap();
        let field = node.definition().as_field().unwrap();

        assert_eq!(field.internal_name.as_deref(), Some("Title"));
        assert_eq!(field.required, Some(true));
        assert_eq!(field.field_type.as_deref(), Some("Text"));
        assert!(field.id.is_some());
        assert_eq!(field.description, None);
        assert!(node.options().require_self_processing);
    }

    #[test]
    fn note_post_process_fills_variant_properties() {
        let remote = remote();
        let host = ReverseHost::inherit(&site_host(), DefinitionKind::NoteField, "f-notes".into());

        let node = FieldReverseHandler::note()
            .reverse_single_host(&remote, &host, &ReverseOptions::default())
            .unwrap();

        match node.definition() {
            Definition::NoteField(note) => {
                assert_eq!(note.number_of_lines, Some(6));
                assert_eq!(note.rich_text, Some(false));
                assert_eq!(note.field.internal_name.as_deref(), Some("Notes"));
            }
            other => panic!("expected note field, got {other:?}"),
        }
    }

    #[test]
    fn enumerate_under_wrong_parent_fails() {
        let remote = remote();
        let web = ReverseHost::root(DefinitionKind::Web, RemoteHandle::new("web"));

        let err = FieldReverseHandler::base()
            .reverse_hosts(&remote, &web, &ReverseOptions::default())
            .unwrap_err();
        assert!(matches!(err, ReverseError::TypeMismatch { .. }));
    }

    #[test]
    fn convert_foreign_host_fails() {
        let remote = remote();
        let host = ReverseHost::inherit(&site_host(), DefinitionKind::Field, "f-body".into());

        let err = FieldReverseHandler::html()
            .reverse_single_host(&remote, &host, &ReverseOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ReverseError::HostTypeMismatch {
                handler: DefinitionKind::HtmlField,
                actual: DefinitionKind::Field
            }
        ));
    }
}
