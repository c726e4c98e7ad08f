//! Runner configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [reverse]
//! excluded = ["content_type"]
//! max_depth = 4
//!
//! [registry]
//! handler_sets = ["foundation", "standard"]
//! # handlers = ["site", "field"]   # explicit list, replaces the sets
//!
//! [logging]
//! filter = "info"
//! json = false
//! ```

use crate::error::RunnerError;
use rev_engine::{handlers, HandlerRegistry, HandlerSet, ReverseOptions};
use rev_model::DefinitionKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Traversal settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseConfig {
    /// Kinds whose subtrees are skipped
    pub excluded: Vec<DefinitionKind>,
    /// Allow-list of kinds; `None` allows every kind
    pub only: Option<Vec<DefinitionKind>>,
    /// Depth at which nodes are emitted as leaves
    pub max_depth: Option<usize>,
}

/// Handler registration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Built-in handler sets to register
    pub handler_sets: Vec<HandlerSet>,
    /// Explicit handler kinds; when set, the registry is cleared and only
    /// these are registered
    pub handlers: Option<Vec<DefinitionKind>>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            handler_sets: vec![HandlerSet::Foundation, HandlerSet::Standard],
            handlers: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `REV_LOG` is not set
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Runner configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Traversal settings
    pub reverse: ReverseConfig,
    /// Handler registration
    pub registry: RegistryConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl RunnerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML
    ///
    /// # Errors
    /// Returns `Config` error on malformed TOML or unknown kinds
    pub fn from_toml_str(source: &str) -> Result<Self, RunnerError> {
        toml::from_str(source).map_err(|e| RunnerError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Config` if it is malformed
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        let source = std::fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// With an excluded kind
    #[inline]
    #[must_use]
    pub fn with_excluded(mut self, kind: DefinitionKind) -> Self {
        if !self.reverse.excluded.contains(&kind) {
            self.reverse.excluded.push(kind);
        }
        self
    }

    /// With max traversal depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.reverse.max_depth = Some(depth);
        self
    }

    /// With an explicit handler list
    #[inline]
    #[must_use]
    pub fn with_handlers(mut self, kinds: Vec<DefinitionKind>) -> Self {
        self.registry.handlers = Some(kinds);
        self
    }

    /// With a log filter directive
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }

    /// Traversal options described by this configuration
    #[must_use]
    pub fn reverse_options(&self) -> ReverseOptions {
        let mut options = self
            .reverse
            .excluded
            .iter()
            .fold(ReverseOptions::new(), |options, kind| options.excluding(*kind));
        if let Some(only) = &self.reverse.only {
            options = options.only(only.iter().copied());
        }
        if let Some(depth) = self.reverse.max_depth {
            options = options.with_max_depth(depth);
        }
        options
    }

    /// Handler registry described by this configuration
    ///
    /// # Errors
    /// Returns `UnknownHandler` if the explicit list names a kind without a
    /// built-in handler
    pub fn handler_registry(&self) -> Result<HandlerRegistry, RunnerError> {
        match &self.registry.handlers {
            None => Ok(HandlerRegistry::with_sets(
                self.registry.handler_sets.iter().copied(),
            )),
            Some(kinds) => {
                let mut registry = HandlerRegistry::new();
                for kind in kinds {
                    let handler =
                        handlers::builtin_handler(*kind).ok_or(RunnerError::UnknownHandler(*kind))?;
                    registry.register(handler);
                }
                Ok(registry)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config() {
        let config = RunnerConfig::new();
        assert!(config.reverse.excluded.is_empty());
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.handler_registry().unwrap().len(), 7);
    }

    #[test]
    fn parse_toml() {
        let config = RunnerConfig::from_toml_str(
            r#"
            [reverse]
            excluded = ["content_type"]
            max_depth = 2

            [registry]
            handlers = ["site", "field"]

            [logging]
            filter = "rev_engine=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.reverse.excluded, vec![DefinitionKind::ContentType]);
        assert_eq!(config.logging.filter, "rev_engine=debug");

        let options = config.reverse_options();
        assert!(options.is_excluded(DefinitionKind::ContentType));
        assert_eq!(options.max_depth, Some(2));

        let registry = config.handler_registry().unwrap();
        assert_eq!(registry.kinds(), vec![DefinitionKind::Site, DefinitionKind::Field]);
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = RunnerConfig::from_toml_str("[reverse]\nexcluded = [\"widget\"]").unwrap_err();
        assert!(matches!(err, RunnerError::Config(_)));
    }

    #[test]
    fn explicit_handler_without_builtin() {
        let config = RunnerConfig::new().with_handlers(vec![DefinitionKind::Farm]);
        assert!(matches!(
            config.handler_registry(),
            Err(RunnerError::UnknownHandler(DefinitionKind::Farm))
        ));
    }

    #[test]
    fn builders() {
        let config = RunnerConfig::new()
            .with_excluded(DefinitionKind::Web)
            .with_excluded(DefinitionKind::Web)
            .with_max_depth(3)
            .with_log_filter("debug");

        assert_eq!(config.reverse.excluded, vec![DefinitionKind::Web]);
        assert_eq!(config.reverse.max_depth, Some(3));
        assert_eq!(config.logging.filter, "debug");
    }
}
