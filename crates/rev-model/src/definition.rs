//! Typed definitions
//!
//! A definition is a flat bag of optional, strongly-typed properties describing
//! one configurable remote entity. `None` means the property is unset, either
//! because the original model never declared it or because the reversing
//! handler does not read it yet.

use crate::kind::DefinitionKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Site collection definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDefinition {
    pub id: Option<Uuid>,
    pub url: Option<String>,
}

/// Web definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebDefinition {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Server-relative url; identity key
    pub url: Option<String>,
    pub web_template: Option<String>,
    pub lcid: Option<u32>,
}

/// List definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDefinition {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Web-relative url; identity key
    pub url: Option<String>,
    pub template_type: Option<i64>,
    pub content_types_enabled: Option<bool>,
}

/// Base field definition, shared by every field variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    /// Identity key
    pub internal_name: Option<String>,
    pub description: Option<String>,
    pub group: Option<String>,
    pub default_value: Option<String>,
    pub required: Option<bool>,
    /// Remote field type name, e.g. `Text`, `Note`, `HTML`
    pub field_type: Option<String>,
}

/// Multi-line text field definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFieldDefinition {
    #[serde(flatten)]
    pub field: FieldDefinition,
    pub number_of_lines: Option<u32>,
    pub rich_text: Option<bool>,
}

/// Publishing HTML field definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlFieldDefinition {
    #[serde(flatten)]
    pub field: FieldDefinition,
}

/// Content type definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeDefinition {
    /// Content type id (hex string); identity key
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub group: Option<String>,
}

/// A typed definition; the variant is the definition kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Definition {
    Farm,
    WebApplication,
    Site(SiteDefinition),
    Web(WebDefinition),
    List(ListDefinition),
    Field(FieldDefinition),
    NoteField(NoteFieldDefinition),
    HtmlField(HtmlFieldDefinition),
    ContentType(ContentTypeDefinition),
}

impl Definition {
    /// Kind tag of this definition
    #[must_use]
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::Farm => DefinitionKind::Farm,
            Self::WebApplication => DefinitionKind::WebApplication,
            Self::Site(_) => DefinitionKind::Site,
            Self::Web(_) => DefinitionKind::Web,
            Self::List(_) => DefinitionKind::List,
            Self::Field(_) => DefinitionKind::Field,
            Self::NoteField(_) => DefinitionKind::NoteField,
            Self::HtmlField(_) => DefinitionKind::HtmlField,
            Self::ContentType(_) => DefinitionKind::ContentType,
        }
    }

    /// Key used to pair an original node with its reversed counterpart
    ///
    /// Returns `None` when the identifying property is unset.
    #[must_use]
    pub fn identity_key(&self) -> Option<&str> {
        match self {
            Self::Farm | Self::WebApplication => Some(self.kind().as_str()),
            Self::Site(site) => site.url.as_deref().or(Some("/")),
            Self::Web(web) => web.url.as_deref(),
            Self::List(list) => list.url.as_deref().or(list.title.as_deref()),
            Self::ContentType(ct) => ct.id.as_deref().or(ct.name.as_deref()),
            Self::Field(_) | Self::NoteField(_) | Self::HtmlField(_) => {
                self.as_field().and_then(|f| f.internal_name.as_deref())
            }
        }
    }

    /// Base field properties of any field variant
    #[must_use]
    pub fn as_field(&self) -> Option<&FieldDefinition> {
        match self {
            Self::Field(field) => Some(field),
            Self::NoteField(note) => Some(&note.field),
            Self::HtmlField(html) => Some(&html.field),
            _ => None,
        }
    }

    /// Mutable base field properties of any field variant
    #[must_use]
    pub fn as_field_mut(&mut self) -> Option<&mut FieldDefinition> {
        match self {
            Self::Field(field) => Some(field),
            Self::NoteField(note) => Some(&mut note.field),
            Self::HtmlField(html) => Some(&mut html.field),
            _ => None,
        }
    }
}

impl From<SiteDefinition> for Definition {
    fn from(value: SiteDefinition) -> Self {
        Self::Site(value)
    }
}

impl From<WebDefinition> for Definition {
    fn from(value: WebDefinition) -> Self {
        Self::Web(value)
    }
}

impl From<ListDefinition> for Definition {
    fn from(value: ListDefinition) -> Self {
        Self::List(value)
    }
}

impl From<FieldDefinition> for Definition {
    fn from(value: FieldDefinition) -> Self {
        Self::Field(value)
    }
}

impl From<NoteFieldDefinition> for Definition {
    fn from(value: NoteFieldDefinition) -> Self {
        Self::NoteField(value)
    }
}

impl From<HtmlFieldDefinition> for Definition {
    fn from(value: HtmlFieldDefinition) -> Self {
        Self::HtmlField(value)
    }
}

impl From<ContentTypeDefinition> for Definition {
    fn from(value: ContentTypeDefinition) -> Self {
        Self::ContentType(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(internal_name: &str) -> FieldDefinition {
        FieldDefinition {
            internal_name: Some(internal_name.to_string()),
            title: Some("Title".to_string()),
            ..FieldDefinition::default()
        }
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Definition::from(field("a")).kind(), DefinitionKind::Field);
        assert_eq!(
            Definition::from(HtmlFieldDefinition { field: field("a") }).kind(),
            DefinitionKind::HtmlField
        );
        assert_eq!(Definition::Farm.kind(), DefinitionKind::Farm);
    }

    #[test]
    fn field_variants_share_base() {
        let note = Definition::from(NoteFieldDefinition {
            field: field("Notes"),
            number_of_lines: Some(6),
            rich_text: Some(false),
        });
        assert_eq!(note.as_field().unwrap().internal_name.as_deref(), Some("Notes"));
        assert_eq!(note.identity_key(), Some("Notes"));
    }

    #[test]
    fn identity_key_falls_back() {
        let list = Definition::from(ListDefinition {
            title: Some("Tasks".into()),
            ..ListDefinition::default()
        });
        assert_eq!(list.identity_key(), Some("Tasks"));

        let web = Definition::from(WebDefinition::default());
        assert_eq!(web.identity_key(), None);

        let site = Definition::from(SiteDefinition::default());
        assert_eq!(site.identity_key(), Some("/"));
    }

    #[test]
    fn non_field_has_no_field_view() {
        let mut web = Definition::from(WebDefinition::default());
        assert!(web.as_field().is_none());
        assert!(web.as_field_mut().is_none());
    }

    #[test]
    fn serde_uses_kind_tag() {
        let def = Definition::from(field("Status"));
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["kind"], "field");
        assert_eq!(json["value"]["internal_name"], "Status");

        let back: Definition = serde_json::from_value(json).unwrap();
        assert_eq!(back, def);
    }
}
