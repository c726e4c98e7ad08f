//! Reverse hosts
//!
//! A [`ReverseHost`] binds one remote entity handle to its place in the remote
//! tree. Hosts are created strictly root-to-leaf and never mutated, so the
//! parent link is a plain shared reference with no cycles.

use crate::error::HostChain;
use crate::remote::RemoteHandle;
use rev_model::DefinitionKind;
use std::sync::Arc;

/// Remote scopes a host sits under, used to re-query children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostScope {
    site: Option<RemoteHandle>,
    web: Option<RemoteHandle>,
}

impl HostScope {
    /// Enclosing site collection, if the traversal started at one
    #[inline]
    #[must_use]
    pub fn site(&self) -> Option<&RemoteHandle> {
        self.site.as_ref()
    }

    /// Closest enclosing web
    #[inline]
    #[must_use]
    pub fn web(&self) -> Option<&RemoteHandle> {
        self.web.as_ref()
    }

    fn entering(&self, kind: DefinitionKind, handle: &RemoteHandle) -> Self {
        let mut scope = self.clone();
        match kind {
            DefinitionKind::Site => scope.site = Some(handle.clone()),
            DefinitionKind::Web => scope.web = Some(handle.clone()),
            _ => {}
        }
        scope
    }
}

/// Transient traversal context for one remote entity
#[derive(Debug)]
pub struct ReverseHost {
    kind: DefinitionKind,
    handle: RemoteHandle,
    parent: Option<Arc<ReverseHost>>,
    scope: HostScope,
}

impl ReverseHost {
    /// Create a root host
    #[must_use]
    pub fn root(kind: DefinitionKind, handle: RemoteHandle) -> Arc<Self> {
        let scope = HostScope::default().entering(kind, &handle);
        Arc::new(Self {
            kind,
            handle,
            parent: None,
            scope,
        })
    }

    /// Create a child host linked to `parent`, inheriting its scope
    #[must_use]
    pub fn inherit(parent: &Arc<Self>, kind: DefinitionKind, handle: RemoteHandle) -> Arc<Self> {
        let scope = parent.scope.entering(kind, &handle);
        Arc::new(Self {
            kind,
            handle,
            parent: Some(Arc::clone(parent)),
            scope,
        })
    }

    /// Kind of definition this host reverses into
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    /// Handle of the wrapped remote entity
    #[inline]
    #[must_use]
    pub fn handle(&self) -> &RemoteHandle {
        &self.handle
    }

    /// Parent host; `None` only for the root
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<ReverseHost>> {
        self.parent.as_ref()
    }

    /// Enclosing remote scopes
    #[inline]
    #[must_use]
    pub fn scope(&self) -> &HostScope {
        &self.scope
    }

    /// Whether this is the root host
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Ancestors, closest first
    pub fn ancestors(&self) -> impl Iterator<Item = &ReverseHost> {
        std::iter::successors(self.parent.as_deref(), |h| h.parent.as_deref())
    }

    /// Distance from the root (root is 0)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Chain from the root down to this host
    #[must_use]
    pub fn chain(&self) -> HostChain {
        let mut links: Vec<_> = std::iter::once(self)
            .chain(self.ancestors())
            .map(|h| (h.kind, h.handle.clone()))
            .collect();
        links.reverse();
        HostChain(links)
    }
}
