//! Reverse traversal engine
//!
//! Depth-first and synchronous. For each host the engine asks the registry
//! which handlers attach under the host's kind, enumerates their children,
//! reverses each child recursively and finally converts the host itself,
//! attaching the collected children in enumeration order.

use crate::error::ReverseError;
use crate::handler::ReverseHandler;
use crate::host::ReverseHost;
use crate::options::ReverseOptions;
use crate::registry::HandlerRegistry;
use crate::remote::{RemoteClient, RemoteHandle};
use crate::result::{ReverseResult, ReverseWarning};
use rev_model::{DefinitionKind, ModelNode};
use std::sync::Arc;

/// Rebuilds model trees from a remote object tree
#[derive(Debug, Clone, Default)]
pub struct ReverseService {
    registry: HandlerRegistry,
}

impl ReverseService {
    /// Create service over a handler registry
    #[inline]
    #[must_use]
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Create service with every built-in handler
    #[inline]
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(HandlerRegistry::with_defaults())
    }

    /// Handler registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Mutable handler registry, for targeted runs
    #[inline]
    pub fn registry_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.registry
    }

    /// Reverse the tree under a site collection
    ///
    /// # Errors
    /// See [`ReverseService::reverse`]
    pub fn reverse_site(
        &self,
        remote: &dyn RemoteClient,
        site: RemoteHandle,
        options: &ReverseOptions,
    ) -> Result<ReverseResult, ReverseError> {
        self.reverse(remote, ReverseHost::root(DefinitionKind::Site, site), options)
    }

    /// Reverse the tree under a web
    ///
    /// # Errors
    /// See [`ReverseService::reverse`]
    pub fn reverse_web(
        &self,
        remote: &dyn RemoteClient,
        web: RemoteHandle,
        options: &ReverseOptions,
    ) -> Result<ReverseResult, ReverseError> {
        self.reverse(remote, ReverseHost::root(DefinitionKind::Web, web), options)
    }

    /// Reverse the tree under an arbitrary root host
    ///
    /// # Errors
    /// - `UnsupportedModelType` if no handler can convert the root kind
    /// - `RemoteReadFailure` if any remote read fails; no partial tree is returned
    /// - `TypeMismatch` / `HostTypeMismatch` on handler misconfiguration
    pub fn reverse(
        &self,
        remote: &dyn RemoteClient,
        root: Arc<ReverseHost>,
        options: &ReverseOptions,
    ) -> Result<ReverseResult, ReverseError> {
        let handler = self
            .registry
            .resolve(root.kind())
            .ok_or(ReverseError::UnsupportedModelType(root.kind()))?;

        tracing::info!("Reversing {} model from '{}'", root.kind(), root.handle());

        let mut warnings = Vec::new();
        let model = match self.reverse_host(remote, &root, handler, options, &mut warnings) {
            Ok(model) => model,
            Err(e) => {
                tracing::error!("Reverse failed: {}", e);
                return Err(e);
            }
        };

        tracing::info!(
            "Reversed {} nodes ({} warnings)",
            model.len(),
            warnings.len()
        );
        Ok(ReverseResult { model, warnings })
    }

    fn reverse_host(
        &self,
        remote: &dyn RemoteClient,
        host: &Arc<ReverseHost>,
        handler: &Arc<dyn ReverseHandler>,
        options: &ReverseOptions,
        warnings: &mut Vec<ReverseWarning>,
    ) -> Result<ModelNode, ReverseError> {
        let child_handlers: Vec<_> = self
            .registry
            .child_handlers(host.kind())
            .into_iter()
            .filter(|h| {
                let excluded = options.is_excluded(h.reverse_kind());
                if excluded {
                    tracing::debug!(
                        "Skipping excluded {} under {}",
                        h.reverse_kind(),
                        host.kind()
                    );
                }
                !excluded
            })
            .collect();

        let mut children = Vec::new();
        if child_handlers.is_empty() {
            tracing::debug!("No child handlers under {}", host.kind());
        } else if options.is_depth_limit(host.depth()) {
            warnings.push(ReverseWarning::DepthLimitReached {
                chain: host.chain(),
                max_depth: options.max_depth.unwrap_or_default(),
            });
        } else {
            self.record_coverage_gaps(remote, host, options, warnings)?;

            for child_handler in &child_handlers {
                let hosts = child_handler
                    .reverse_hosts(remote, host, options)
                    .map_err(|e| e.tagged(host.kind(), || host.chain()))?;

                tracing::debug!(
                    "Enumerated {} {} under {}",
                    hosts.len(),
                    child_handler.reverse_kind(),
                    host.handle()
                );

                for child in &hosts {
                    let node = self.reverse_host(remote, child, child_handler, options, warnings)?;
                    children.push(node);
                }
            }
        }

        let node = handler
            .reverse_single_host(remote, host, options)
            .map_err(|e| e.tagged(host.kind(), || host.chain()))?;

        Ok(node.with_children(children))
    }

    fn record_coverage_gaps(
        &self,
        remote: &dyn RemoteClient,
        host: &Arc<ReverseHost>,
        options: &ReverseOptions,
        warnings: &mut Vec<ReverseWarning>,
    ) -> Result<(), ReverseError> {
        let collections = remote
            .collections(host.handle())
            .map_err(|e| ReverseError::from(e).tagged(host.kind(), || host.chain()))?;

        for collection in collections {
            let kind = collection.kind();
            let covered = match kind {
                Some(kind) if options.is_excluded(kind) => true,
                Some(kind) => self
                    .registry
                    .resolve(kind)
                    .is_some_and(|h| h.attaches_to(host.kind())),
                None => false,
            };

            if !covered {
                let gap = ReverseWarning::CoverageGap {
                    collection,
                    kind,
                    chain: host.chain(),
                };
                tracing::warn!("Coverage gap: {}", gap);
                warnings.push(gap);
            }
        }
        Ok(())
    }
}
