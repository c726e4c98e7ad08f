//! List handler

use crate::error::ReverseError;
use crate::handler::{inherit_all, reversed_node, ReverseHandler};
use crate::host::ReverseHost;
use crate::options::ReverseOptions;
use crate::remote::{Collection, RemoteClient, RemoteQuery};
use rev_model::{DefinitionKind, ListDefinition, ModelNode};
use std::sync::Arc;

const LIST_PARENTS: &[DefinitionKind] = &[DefinitionKind::Site, DefinitionKind::Web];

/// Reverses lists of a site root web or a sub web
#[derive(Debug, Clone, Copy, Default)]
pub struct ListReverseHandler;

impl ReverseHandler for ListReverseHandler {
    fn reverse_kind(&self) -> DefinitionKind {
        DefinitionKind::List
    }

    fn parent_kinds(&self) -> &[DefinitionKind] {
        LIST_PARENTS
    }

    fn reverse_hosts(
        &self,
        remote: &dyn RemoteClient,
        parent: &Arc<ReverseHost>,
        _options: &ReverseOptions,
    ) -> Result<Vec<Arc<ReverseHost>>, ReverseError> {
        self.ensure_parent(parent)?;

        let handles = remote.children(parent.handle(), Collection::Lists, &RemoteQuery::all())?;
        Ok(inherit_all(parent, DefinitionKind::List, handles))
    }

    fn reverse_single_host(
        &self,
        remote: &dyn RemoteClient,
        host: &ReverseHost,
        _options: &ReverseOptions,
    ) -> Result<ModelNode, ReverseError> {
        self.ensure_own(host)?;

        let entity = remote.read(host.handle())?;
        Ok(reversed_node(ListDefinition {
            title: entity.text("Title"),
            description: entity.text("Description"),
            url: entity.text("Url"),
            template_type: entity.integer("BaseTemplate"),
            content_types_enabled: entity.flag("ContentTypesEnabled"),
        }))
    }
}
