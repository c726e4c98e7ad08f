//! Web handler

use crate::error::ReverseError;
use crate::handler::{inherit_all, reversed_node, ReverseHandler};
use crate::host::ReverseHost;
use crate::options::ReverseOptions;
use crate::remote::{Collection, RemoteClient, RemoteQuery};
use rev_model::{DefinitionKind, ModelNode, WebDefinition};
use std::sync::Arc;

const WEB_PARENTS: &[DefinitionKind] = &[DefinitionKind::Site, DefinitionKind::Web];

/// Reverses sub webs of a site or web
#[derive(Debug, Clone, Copy, Default)]
pub struct WebReverseHandler;

impl ReverseHandler for WebReverseHandler {
    fn reverse_kind(&self) -> DefinitionKind {
        DefinitionKind::Web
    }

    fn parent_kinds(&self) -> &[DefinitionKind] {
        WEB_PARENTS
    }

    fn reverse_hosts(
        &self,
        remote: &dyn RemoteClient,
        parent: &Arc<ReverseHost>,
        _options: &ReverseOptions,
    ) -> Result<Vec<Arc<ReverseHost>>, ReverseError> {
        self.ensure_parent(parent)?;

        let handles = remote.children(parent.handle(), Collection::Webs, &RemoteQuery::all())?;
        Ok(inherit_all(parent, DefinitionKind::Web, handles))
    }

    fn reverse_single_host(
        &self,
        remote: &dyn RemoteClient,
        host: &ReverseHost,
        _options: &ReverseOptions,
    ) -> Result<ModelNode, ReverseError> {
        self.ensure_own(host)?;

        let entity = remote.read(host.handle())?;
        Ok(reversed_node(WebDefinition {
            title: entity.text("Title"),
            description: entity.text("Description"),
            url: entity.text("ServerRelativeUrl"),
            web_template: entity.text("WebTemplate"),
            lcid: entity.uint("Language"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteHandle;
    use crate::snapshot::{RemoteNode, SnapshotRemote};
    use rev_model::Definition;

    fn remote() -> SnapshotRemote {
        let site = RemoteNode::new("site").with_child(
            Collection::Webs,
            RemoteNode::new("w-news")
                .with_property("Title", "News")
                .with_property("ServerRelativeUrl", "/news")
                .with_property("WebTemplate", "STS")
                .with_property("Language", 1033)
                .with_child(Collection::Webs, RemoteNode::new("w-archive")),
        );
        SnapshotRemote::new(site).unwrap()
    }

    #[test]
    fn enumerates_under_site_and_web() {
        let remote = remote();
        let site = ReverseHost::root(DefinitionKind::Site, RemoteHandle::new("site"));

        let webs = WebReverseHandler
            .reverse_hosts(&remote, &site, &ReverseOptions::default())
            .unwrap();
        assert_eq!(webs.len(), 1);
        assert_eq!(webs[0].scope().web(), Some(&RemoteHandle::new("w-news")));

        let sub = WebReverseHandler
            .reverse_hosts(&remote, &webs[0], &ReverseOptions::default())
            .unwrap();
        assert_eq!(sub[0].handle().as_str(), "w-archive");
    }

    #[test]
    fn converts_properties() {
        let remote = remote();
        let site = ReverseHost::root(DefinitionKind::Site, RemoteHandle::new("site"));
        let host = ReverseHost::inherit(&site, DefinitionKind::Web, "w-news".into());

        let node = WebReverseHandler
            .reverse_single_host(&remote, &host, &ReverseOptions::default())
            .unwrap();
        match node.definition() {
            Definition::Web(web) => {
                assert_eq!(web.title.as_deref(), Some("News"));
                assert_eq!(web.url.as_deref(), Some("/news"));
                assert_eq!(web.lcid, Some(1033));
                assert_eq!(web.description, None);
            }
            other => panic!("expected web, got {other:?}"),
        }
    }
}
