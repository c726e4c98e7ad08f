//! Reverse-then-validate runs
//!
//! A run reverses the remote tree once per original model, validates the
//! original against the reversed tree into a single accumulator, and
//! aggregates coverage over everything recorded.

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use rev_engine::{RemoteClient, RemoteHandle, ReverseError, ReverseResult, ReverseService, SnapshotRemote};
use rev_model::{DefinitionKind, ModelNode};
use rev_regression::{
    CoverageAggregator, CoverageReport, PropertyValidationResult, ReverseValidationService,
    UnvalidatedMarker, ValidationAccumulator,
};
use serde::Serialize;
use std::path::Path;

/// Invalid property record with the type it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidProperty {
    /// Definition type name
    pub model: String,
    /// Failing record
    pub record: PropertyValidationResult,
}

/// Outcome of a validation run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// No invalid property and no unvalidated node
    pub passed: bool,
    /// Number of original models validated
    pub models: usize,
    /// Coverage per definition type
    pub coverage: CoverageReport,
    /// Every invalid property record
    pub invalid: Vec<InvalidProperty>,
    /// Nodes skipped for lack of a validator
    pub unvalidated: Vec<UnvalidatedMarker>,
    /// Properties never set on either side, as `Type.property`
    pub unset: Vec<String>,
    /// Traversal warnings, rendered
    pub warnings: Vec<String>,
}

/// Runner bound to one configuration
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunnerConfig,
    reverse: ReverseService,
    validation: ReverseValidationService,
}

impl Runner {
    /// Create runner, building the handler registry from `config`
    ///
    /// # Errors
    /// Returns `UnknownHandler` if the configured handler list is invalid
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let registry = config.handler_registry()?;
        tracing::debug!("Runner registry serves {:?}", registry.kinds());
        Ok(Self {
            config,
            reverse: ReverseService::new(registry),
            validation: ReverseValidationService::with_defaults(),
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Reverse from `root`, treating it as an entity of `kind`
    ///
    /// # Errors
    /// - `UnsupportedModelType` for any root kind other than site or web
    /// - any traversal error from the engine
    pub fn reverse(
        &self,
        remote: &dyn RemoteClient,
        kind: DefinitionKind,
        root: RemoteHandle,
    ) -> Result<ReverseResult, RunnerError> {
        let options = self.config.reverse_options();
        let result = match kind {
            DefinitionKind::Site => self.reverse.reverse_site(remote, root, &options),
            DefinitionKind::Web => self.reverse.reverse_web(remote, root, &options),
            other => Err(ReverseError::UnsupportedModelType(other)),
        }?;
        Ok(result)
    }

    /// Reverse from `root` once per original and validate each against it
    ///
    /// # Errors
    /// Returns the first traversal or structural validation error.
    /// Property mismatches are reported, not raised.
    pub fn validate(
        &self,
        remote: &dyn RemoteClient,
        originals: &[ModelNode],
        root: &RemoteHandle,
    ) -> Result<RunReport, RunnerError> {
        let mut acc = ValidationAccumulator::new();
        acc.start_new_run();

        let mut warnings = Vec::new();
        let mut passed = true;

        for original in originals {
            let reversed = self.reverse(remote, original.kind(), root.clone())?;
            warnings.extend(reversed.warnings.iter().map(ToString::to_string));

            self.validation
                .validate_into(original, &reversed.model, &mut acc)?;

            if acc.resolve_model_validation(original) {
                tracing::warn!("{} model from '{}' failed validation", original.kind(), root);
                passed = false;
            }
        }

        let invalid: Vec<InvalidProperty> = acc
            .invalid_properties()
            .map(|(kind, record)| InvalidProperty {
                model: kind.type_name().to_string(),
                record: record.clone(),
            })
            .collect();

        let coverage = CoverageAggregator::new().report(acc.results());
        let report = RunReport {
            passed,
            models: originals.len(),
            unset: coverage.unset_properties(),
            coverage,
            invalid,
            unvalidated: acc.unvalidated().to_vec(),
            warnings,
        };

        tracing::info!(
            "Validated {} models: {} invalid properties, {} unvalidated nodes",
            report.models,
            report.invalid.len(),
            report.unvalidated.len()
        );
        Ok(report)
    }
}

/// Load a snapshot file (single root object or array of roots)
///
/// # Errors
/// Returns `Io` if unreadable, `Remote` if the snapshot is malformed
pub fn load_snapshot(path: &Path) -> Result<SnapshotRemote, RunnerError> {
    let json = std::fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
    Ok(SnapshotRemote::from_json(&json)?)
}

/// Load original models (single model object or array of models)
///
/// # Errors
/// Returns `Io` if unreadable, `Json` if the models are malformed
pub fn load_models(path: &Path) -> Result<Vec<ModelNode>, RunnerError> {
    let json = std::fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
    let context = path.display().to_string();

    let value: serde_json::Value =
        serde_json::from_str(&json).map_err(|e| RunnerError::json(&context, &e))?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|model| vec![model])
    }
    .map_err(|e| RunnerError::json(context, &e))
}

/// First root of the snapshot
///
/// # Errors
/// Returns `EmptySnapshot` if the snapshot has no roots
pub fn default_root(remote: &SnapshotRemote) -> Result<RemoteHandle, RunnerError> {
    remote
        .roots()
        .first()
        .cloned()
        .ok_or(RunnerError::EmptySnapshot)
}

/// Write any serializable value as pretty JSON
///
/// # Errors
/// Returns `Json` on serialization failure, `Io` on write failure
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), RunnerError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| RunnerError::json(path.display().to_string(), &e))?;
    std::fs::write(path, json).map_err(|e| RunnerError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rev_test_utils::{intranet_remote, original_intranet_model, SITE_HANDLE};

    #[test]
    fn only_site_and_web_roots() {
        let runner = Runner::new(RunnerConfig::new()).unwrap();
        let remote = intranet_remote();

        for kind in [DefinitionKind::Farm, DefinitionKind::WebApplication, DefinitionKind::List] {
            let err = runner.reverse(&remote, kind, SITE_HANDLE.into()).unwrap_err();
            assert!(matches!(
                err,
                RunnerError::Reverse(ReverseError::UnsupportedModelType(k)) if k == kind
            ));
        }
    }

    #[test]
    fn validate_intranet_passes() {
        let runner = Runner::new(RunnerConfig::new()).unwrap();
        let report = runner
            .validate(
                &intranet_remote(),
                &[original_intranet_model()],
                &SITE_HANDLE.into(),
            )
            .unwrap();

        assert!(report.passed, "{:#?}", report.invalid);
        assert_eq!(report.models, 1);
        assert!(report.coverage.is_fully_valid());
        assert!(!report.warnings.is_empty());
    }
}
