//! Testing utilities for the REV workspace
//!
//! Shared fixtures: a captured intranet site snapshot and the original model
//! that was deployed to produce it.

#![allow(missing_docs)]

use rev_engine::{Collection, RemoteNode, SnapshotRemote};
use rev_model::{
    ContentTypeDefinition, FieldDefinition, HtmlFieldDefinition, ListDefinition, ModelNode,
    NoteFieldDefinition, SiteDefinition, WebDefinition,
};
use uuid::Uuid;

pub const SITE_HANDLE: &str = "site-intranet";
pub const NEWS_WEB_HANDLE: &str = "web-news";
pub const SITE_URL: &str = "/sites/intranet";
pub const NEWS_URL: &str = "/sites/intranet/news";
pub const TITLE_FIELD_ID: &str = "fa564e0f-0c70-4ab9-b863-0177e6ddd247";
pub const SITE_ID: &str = "6c5c2d3b-4f1e-4a0a-9d8e-2b7c1e0f9a11";

pub fn site_id() -> Uuid {
    Uuid::parse_str(SITE_ID).unwrap()
}

pub fn title_field_id() -> Uuid {
    Uuid::parse_str(TITLE_FIELD_ID).unwrap()
}

pub fn remote_field(id: &str, internal_name: &str, type_name: &str) -> RemoteNode {
    RemoteNode::new(id)
        .with_property("InternalName", internal_name)
        .with_property("Title", internal_name)
        .with_property("TypeAsString", type_name)
        .with_property("Group", "Custom Columns")
        .with_property("Required", false)
}

/// Site with `names.len()` text fields, in the given order
pub fn site_with_fields(names: &[&str]) -> RemoteNode {
    names
        .iter()
        .enumerate()
        .fold(
            RemoteNode::new(SITE_HANDLE).with_property("ServerRelativeUrl", SITE_URL),
            |site, (i, name)| {
                site.with_child(
                    Collection::Fields,
                    remote_field(&format!("f-{i}"), name, "Text"),
                )
            },
        )
}

pub fn news_web() -> RemoteNode {
    RemoteNode::new(NEWS_WEB_HANDLE)
        .with_property("Title", "News")
        .with_property("ServerRelativeUrl", NEWS_URL)
        .with_property("WebTemplate", "STS")
        .with_property("Language", 1033)
        .with_child(
            Collection::Lists,
            RemoteNode::new("list-announcements")
                .with_property("Title", "Announcements")
                .with_property("Url", "Lists/Announcements")
                .with_property("BaseTemplate", 104)
                .with_property("ContentTypesEnabled", false),
        )
        .with_child(
            Collection::Webs,
            RemoteNode::new("web-archive")
                .with_property("Title", "Archive")
                .with_property("ServerRelativeUrl", "/sites/intranet/news/archive")
                .with_property("WebTemplate", "STS")
                .with_property("Language", 1033),
        )
}

/// Captured intranet site
///
/// Carries a features collection the model has no kind for, so reversing it
/// always reports one coverage gap.
pub fn intranet_site() -> RemoteNode {
    RemoteNode::new(SITE_HANDLE)
        .with_property("Id", format!("{{{}}}", SITE_ID.to_uppercase()))
        .with_property("ServerRelativeUrl", SITE_URL)
        .with_child(
            Collection::Fields,
            RemoteNode::new("field-title")
                .with_property("Id", TITLE_FIELD_ID)
                .with_property("InternalName", "Title")
                .with_property("Title", "Title")
                .with_property("TypeAsString", "Text")
                .with_property("Group", "Core Columns")
                .with_property("Required", true),
        )
        .with_child(
            Collection::Fields,
            remote_field("field-notes", "Notes", "Note")
                .with_property("NumberOfLines", 6)
                .with_property("RichText", false),
        )
        .with_child(
            Collection::Fields,
            remote_field("field-body", "PublishingPageContent", "HTML"),
        )
        .with_child(
            Collection::ContentTypes,
            RemoteNode::new("ct-item")
                .with_property("StringId", "0x01")
                .with_property("Name", "Item")
                .with_property("Group", "List Content Types"),
        )
        .with_child(
            Collection::ContentTypes,
            RemoteNode::new("ct-document")
                .with_property("StringId", "0x0101")
                .with_property("Name", "Document")
                .with_property("Description", "Create a new document.")
                .with_property("Group", "Document Content Types"),
        )
        .with_child(
            Collection::Lists,
            RemoteNode::new("list-documents")
                .with_property("Title", "Documents")
                .with_property("Url", "Shared Documents")
                .with_property("BaseTemplate", 101)
                .with_property("ContentTypesEnabled", true),
        )
        .with_child(Collection::Webs, news_web())
        .with_child(
            Collection::Features,
            RemoteNode::new("feature-publishing").with_property("DisplayName", "Publishing"),
        )
}

pub fn intranet_remote() -> SnapshotRemote {
    SnapshotRemote::new(intranet_site()).unwrap()
}

fn field_definition(internal_name: &str, group: &str, required: bool) -> FieldDefinition {
    FieldDefinition {
        title: Some(internal_name.to_string()),
        internal_name: Some(internal_name.to_string()),
        group: Some(group.to_string()),
        required: Some(required),
        ..FieldDefinition::default()
    }
}

pub fn original_news_web() -> ModelNode {
    ModelNode::new(WebDefinition {
        title: Some("News".to_string()),
        url: Some(NEWS_URL.to_string()),
        web_template: Some("STS".to_string()),
        lcid: Some(1033),
        ..WebDefinition::default()
    })
    .with_child(ModelNode::new(ListDefinition {
        title: Some("Announcements".to_string()),
        url: Some("Lists/Announcements".to_string()),
        template_type: Some(104),
        content_types_enabled: Some(false),
        ..ListDefinition::default()
    }))
}

/// Model deployed to produce [`intranet_site`]
///
/// Declares a subset of what the remote carries; built-in entities such as
/// the `Item` content type are absent on purpose.
pub fn original_intranet_model() -> ModelNode {
    ModelNode::new(SiteDefinition {
        id: Some(site_id()),
        url: Some(SITE_URL.to_string()),
    })
    .with_child(ModelNode::new(FieldDefinition {
        id: Some(title_field_id()),
        field_type: Some("Text".to_string()),
        ..field_definition("Title", "Core Columns", true)
    }))
    .with_child(ModelNode::new(NoteFieldDefinition {
        field: FieldDefinition {
            field_type: Some("Note".to_string()),
            ..field_definition("Notes", "Custom Columns", false)
        },
        number_of_lines: Some(6),
        rich_text: Some(false),
    }))
    .with_child(ModelNode::new(HtmlFieldDefinition {
        field: FieldDefinition {
            field_type: Some("HTML".to_string()),
            ..field_definition("PublishingPageContent", "Custom Columns", false)
        },
    }))
    .with_child(ModelNode::new(ContentTypeDefinition {
        id: Some("0x0101".to_string()),
        name: Some("Document".to_string()),
        description: Some("Create a new document.".to_string()),
        group: Some("Document Content Types".to_string()),
    }))
    .with_child(original_news_web())
}

pub fn snapshot_json(root: &RemoteNode) -> String {
    serde_json::to_string_pretty(root).unwrap()
}

pub fn model_json(model: &ModelNode) -> String {
    serde_json::to_string_pretty(model).unwrap()
}
