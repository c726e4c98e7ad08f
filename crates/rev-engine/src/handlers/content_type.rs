//! Content type handler

use crate::error::ReverseError;
use crate::handler::{inherit_all, reversed_node, ReverseHandler};
use crate::host::ReverseHost;
use crate::options::ReverseOptions;
use crate::remote::{Collection, RemoteClient, RemoteQuery};
use rev_model::{ContentTypeDefinition, DefinitionKind, ModelNode};
use std::sync::Arc;

const CONTENT_TYPE_PARENTS: &[DefinitionKind] = &[DefinitionKind::Site];

/// Reverses site content types
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeReverseHandler;

impl ReverseHandler for ContentTypeReverseHandler {
    fn reverse_kind(&self) -> DefinitionKind {
        DefinitionKind::ContentType
    }

    fn parent_kinds(&self) -> &[DefinitionKind] {
        CONTENT_TYPE_PARENTS
    }

    fn reverse_hosts(
        &self,
        remote: &dyn RemoteClient,
        parent: &Arc<ReverseHost>,
        _options: &ReverseOptions,
    ) -> Result<Vec<Arc<ReverseHost>>, ReverseError> {
        self.ensure_parent(parent)?;

        let site = parent.scope().site().unwrap_or_else(|| parent.handle());
        let handles = remote.children(site, Collection::ContentTypes, &RemoteQuery::all())?;
        Ok(inherit_all(parent, DefinitionKind::ContentType, handles))
    }

    fn reverse_single_host(
        &self,
        remote: &dyn RemoteClient,
        host: &ReverseHost,
        _options: &ReverseOptions,
    ) -> Result<ModelNode, ReverseError> {
        self.ensure_own(host)?;

        let entity = remote.read(host.handle())?;
        Ok(reversed_node(ContentTypeDefinition {
            id: entity.text("StringId"),
            name: entity.text("Name"),
            description: entity.text("Description"),
            group: entity.text("Group"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteHandle;
    use crate::snapshot::{RemoteNode, SnapshotRemote};
    use rev_model::Definition;

    #[test]
    fn converts_content_type() {
        let remote = SnapshotRemote::new(
            RemoteNode::new("site").with_child(
                Collection::ContentTypes,
                RemoteNode::new("ct-1")
                    .with_property("StringId", "0x0101009A")
                    .with_property("Name", "Contract")
                    .with_property("Group", "Legal"),
            ),
        )
        .unwrap();
        let site = ReverseHost::root(DefinitionKind::Site, RemoteHandle::new("site"));

        let hosts = ContentTypeReverseHandler
            .reverse_hosts(&remote, &site, &ReverseOptions::default())
            .unwrap();
        let node = ContentTypeReverseHandler
            .reverse_single_host(&remote, &hosts[0], &ReverseOptions::default())
            .unwrap();

        match node.definition() {
            Definition::ContentType(ct) => {
                assert_eq!(ct.id.as_deref(), Some("0x0101009A"));
                assert_eq!(ct.name.as_deref(), Some("Contract"));
                assert_eq!(ct.description, None);
            }
            other => panic!("expected content type, got {other:?}"),
        }
    }
}
