//! Site handler
//!
//! Sites only ever appear as traversal roots, so the handler declares no
//! parent kinds and enumeration always fails with a type mismatch.

use crate::error::ReverseError;
use crate::handler::{reversed_node, ReverseHandler};
use crate::host::ReverseHost;
use crate::options::ReverseOptions;
use crate::remote::RemoteClient;
use rev_model::{DefinitionKind, ModelNode, SiteDefinition};
use std::sync::Arc;

/// Reverses a site collection root
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteReverseHandler;

impl ReverseHandler for SiteReverseHandler {
    fn reverse_kind(&self) -> DefinitionKind {
        DefinitionKind::Site
    }

    fn parent_kinds(&self) -> &[DefinitionKind] {
        &[]
    }

    fn reverse_hosts(
        &self,
        _remote: &dyn RemoteClient,
        parent: &Arc<ReverseHost>,
        _options: &ReverseOptions,
    ) -> Result<Vec<Arc<ReverseHost>>, ReverseError> {
        self.ensure_parent(parent)?;
        Ok(Vec::new())
    }

    fn reverse_single_host(
        &self,
        remote: &dyn RemoteClient,
        host: &ReverseHost,
        _options: &ReverseOptions,
    ) -> Result<ModelNode, ReverseError> {
        self.ensure_own(host)?;

        let entity = remote.read(host.handle())?;
        Ok(reversed_node(SiteDefinition {
            id: entity.guid("Id"),
            url: entity.text("ServerRelativeUrl"),
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
    fn converts_root() {
        let remote = SnapshotRemote::new(
            RemoteNode::new("site")
                .with_property("ServerRelativeUrl", "/sites/intranet")
                .with_property("Id", "{5B7A0F5E-9C3B-4F3E-8C57-0B8A6D1C2E3F}"),
        )
        .unwrap();
        let host = ReverseHost::root(DefinitionKind::Site, RemoteHandle::new("site"));

        let node = SiteReverseHandler
            .reverse_single_host(&remote, &host, &ReverseOptions::default())
            .unwrap();
        match node.definition() {
            Definition::Site(site) => {
                assert_eq!(site.url.as_deref(), Some("/sites/intranet"));
                assert!(site.id.is_some());
            }
            other => panic!("expected site, got {other:?}"),
        }
    }

    #[test]
    fn never_enumerates() {
        let remote = SnapshotRemote::new(RemoteNode::new("site")).unwrap();
        let host = ReverseHost::root(DefinitionKind::Site, RemoteHandle::new("site"));

        let err = SiteReverseHandler
            .reverse_hosts(&remote, &host, &ReverseOptions::default())
            .unwrap_err();
        assert!(err.is_structural());
    }
}
