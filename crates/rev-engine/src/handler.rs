//! Reverse handler trait
//!
//! A handler knows one definition kind: where it may attach in the remote
//! tree, how to enumerate its entities under a parent host, and how to turn
//! one host into one model node.

use crate::error::ReverseError;
use crate::host::ReverseHost;
use crate::options::ReverseOptions;
use crate::remote::{RemoteClient, RemoteHandle};
use rev_model::{Definition, DefinitionKind, KindKeyed, ModelNode, NodeOptions};
use std::fmt;
use std::sync::Arc;

/// Type-specific strategy for reversing one definition kind
///
/// # Contract
/// - `reverse_hosts` only accepts parents whose kind is in `parent_kinds`,
///   returns children in remote order, and treats "no children" as success
/// - `reverse_single_host` only accepts hosts of `reverse_kind`, reads the
///   entity fresh on every call and never writes to the remote
pub trait ReverseHandler: Send + Sync + fmt::Debug {
    /// Definition kind this handler produces
    fn reverse_kind(&self) -> DefinitionKind;

    /// Parent kinds this handler may be invoked under
    fn parent_kinds(&self) -> &[DefinitionKind];

    /// Enumerate immediate children of this handler's kind under `parent`
    fn reverse_hosts(
        &self,
        remote: &dyn RemoteClient,
        parent: &Arc<ReverseHost>,
        options: &ReverseOptions,
    ) -> Result<Vec<Arc<ReverseHost>>, ReverseError>;

    /// Convert one host into one model node
    fn reverse_single_host(
        &self,
        remote: &dyn RemoteClient,
        host: &ReverseHost,
        options: &ReverseOptions,
    ) -> Result<ModelNode, ReverseError>;

    /// Whether this handler attaches under `parent`
    #[inline]
    fn attaches_to(&self, parent: DefinitionKind) -> bool {
        self.parent_kinds().contains(&parent)
    }

    /// Fail with `TypeMismatch` unless `parent` is a valid attachment point
    fn ensure_parent(&self, parent: &ReverseHost) -> Result<(), ReverseError> {
        if self.attaches_to(parent.kind()) {
            Ok(())
        } else {
            Err(ReverseError::TypeMismatch {
                handler: self.reverse_kind(),
                expected: self.parent_kinds().to_vec(),
                actual: parent.kind(),
            })
        }
    }

    /// Fail with `HostTypeMismatch` unless `host` belongs to this handler
    fn ensure_own(&self, host: &ReverseHost) -> Result<(), ReverseError> {
        if host.kind() == self.reverse_kind() {
            Ok(())
        } else {
            Err(ReverseError::HostTypeMismatch {
                handler: self.reverse_kind(),
                actual: host.kind(),
            })
        }
    }
}

impl KindKeyed for dyn ReverseHandler {
    fn key_kind(&self) -> DefinitionKind {
        self.reverse_kind()
    }
}

/// Wrap enumerated handles into child hosts of `parent`
#[must_use]
pub fn inherit_all(
    parent: &Arc<ReverseHost>,
    kind: DefinitionKind,
    handles: Vec<RemoteHandle>,
) -> Vec<Arc<ReverseHost>> {
    handles
        .into_iter()
        .map(|handle| ReverseHost::inherit(parent, kind, handle))
        .collect()
}

/// Model node for a freshly reversed definition
#[inline]
#[must_use]
pub fn reversed_node(definition: impl Into<Definition>) -> ModelNode {
    ModelNode::new(definition).with_options(NodeOptions {
        require_self_processing: true,
    })
}
