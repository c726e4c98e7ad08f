//! REV Regression
//!
//! Validates a reversed model tree against the original model that was
//! deployed, and reduces the outcome into a coverage report.
//!
//! # Core Concepts
//!
//! - [`ModelAssert`]: Declarative chain of property pairs to compare
//! - [`DefinitionValidator`]: Per-kind list of compared properties
//! - [`ValidatorRegistry`]: Kind-indexed validator lookup
//! - [`ReverseValidationService`]: Pairs original and reversed nodes by identity
//! - [`ValidationAccumulator`]: Explicit per-run log of validation results
//! - [`CoverageAggregator`]: One [`CoverageResult`] per kind, sorted by type name
//!
//! # Example
//!
//! ```rust
//! use rev_model::{FieldDefinition, ModelNode, SiteDefinition};
//! use rev_regression::{CoverageAggregator, ReverseValidationService};
//!
//! let original = ModelNode::new(SiteDefinition::default()).with_child(ModelNode::new(
//!     FieldDefinition {
//!         internal_name: Some("Status".to_string()),
//!         ..FieldDefinition::default()
//!     },
//! ));
//! let reversed = original.clone();
//!
//! let acc = ReverseValidationService::with_defaults()
//!     .validate(&original, &reversed)
//!     .unwrap();
//! assert!(!acc.has_invalid_properties());
//!
//! let report = CoverageAggregator::new().report(acc.results());
//! assert_eq!(report.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod accumulator;
mod assert;
mod coverage;
mod error;
mod record;
mod registry;
mod service;
mod validator;
pub mod validators;

// Re-exports
pub use accumulator::ValidationAccumulator;
pub use assert::ModelAssert;
pub use coverage::{CoverageAggregator, CoveragePropertyResult, CoverageReport, CoverageResult};
pub use error::ValidationError;
pub use record::{
    ModelValidationResult, PropertyValidationResult, UnvalidatedMarker, DST_PREFIX, SRC_PREFIX,
    UNSET_ON_BOTH_SIDES,
};
pub use registry::ValidatorRegistry;
pub use service::ReverseValidationService;
pub use validator::DefinitionValidator;
pub use validators::ValidatorSet;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
