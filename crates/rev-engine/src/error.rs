//! Error types for the reverse engine
//!
//! - Structural errors (handler/host type disagreement) are programmer errors
//!   and always escalate.
//! - Remote read failures abort the current traversal; the engine never retries.
//! - A root kind without a handler is unsupported; gaps below the root are
//!   warnings, not errors.

use crate::remote::RemoteHandle;
use rev_model::DefinitionKind;
use std::fmt;

/// Opaque failure reported by the remote read collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("remote read failed: {message}")]
pub struct RemoteError {
    message: String,
}

impl RemoteError {
    /// Create remote error with message
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Entity is unknown to the remote system
    #[inline]
    #[must_use]
    pub fn not_found(handle: &RemoteHandle) -> Self {
        Self::new(format!("entity '{handle}' not found"))
    }

    /// Failure message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ancestor chain of a host, root first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostChain(pub Vec<(DefinitionKind, RemoteHandle)>);

impl HostChain {
    /// Kinds along the chain, root first
    #[must_use]
    pub fn kinds(&self) -> Vec<DefinitionKind> {
        self.0.iter().map(|(kind, _)| *kind).collect()
    }
}

impl fmt::Display for HostChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (kind, handle)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{kind}({handle})")?;
        }
        Ok(())
    }
}

/// Reverse traversal error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReverseError {
    /// Handler asked to enumerate under a parent it does not attach to
    #[error("type mismatch: {handler} handler cannot enumerate under {actual} (expects one of {expected:?})")]
    TypeMismatch {
        /// Kind the handler reverses
        handler: DefinitionKind,
        /// Parent kinds the handler attaches to
        expected: Vec<DefinitionKind>,
        /// Parent kind it was asked to enumerate under
        actual: DefinitionKind,
    },

    /// Handler asked to convert a host it did not produce
    #[error("host type mismatch: {handler} handler cannot convert a {actual} host")]
    HostTypeMismatch {
        /// Kind the handler reverses
        handler: DefinitionKind,
        /// Kind of the host it was handed
        actual: DefinitionKind,
    },

    /// Remote failure raised inside a handler, not yet tagged with its host
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Remote failure tagged with the host that was being reversed
    #[error("{source} (reversing {kind} at {chain})")]
    RemoteReadFailure {
        /// Kind of the host being reversed
        kind: DefinitionKind,
        /// Ancestor chain down to that host
        chain: HostChain,
        /// Underlying remote failure
        source: RemoteError,
    },

    /// No handler can reverse this kind
    #[error("unsupported model type: {0}")]
    UnsupportedModelType(DefinitionKind),
}

impl ReverseError {
    /// Check if error is a handler/host type disagreement
    #[inline]
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::HostTypeMismatch { .. }
        )
    }

    /// Check if the caller may retry the whole traversal
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Remote(_) | Self::RemoteReadFailure { .. })
    }

    /// Tag an untagged remote failure with the host it occurred on
    #[must_use]
    pub fn tagged(self, kind: DefinitionKind, chain: impl FnOnce() -> HostChain) -> Self {
        match self {
            Self::Remote(source) => Self::RemoteReadFailure {
                kind,
                chain: chain(),
                source,
            },
            other => other,
        }
    }
}
