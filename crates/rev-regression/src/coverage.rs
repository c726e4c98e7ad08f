//! Coverage aggregation
//!
//! Reduces the validation results of a run into one [`CoverageResult`] per
//! definition kind. The first result seen for a kind provides the model
//! metadata; property records of every instance are unioned, exact duplicates
//! collapsing into one. Output is sorted by type name.

use crate::record::{ModelValidationResult, PropertyValidationResult};
use indexmap::{IndexMap, IndexSet};
use rev_model::{Definition, DefinitionKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// One property row of a coverage result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CoveragePropertyResult {
    /// Original-side property path
    pub src_property_name: String,
    /// Canonical original value
    pub src_property_value: Option<String>,
    /// Reversed-side property path
    pub dst_property_name: String,
    /// Canonical reversed value
    pub dst_property_value: Option<String>,
    /// Whether the property is supported and matched
    pub is_valid: bool,
    /// Diagnostic message
    pub message: Option<String>,
}

impl CoveragePropertyResult {
    /// Valid only because neither tree sets the property
    #[inline]
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.is_valid && self.src_property_value.is_none() && self.dst_property_value.is_none()
    }

    /// Property name without accessor prefix (`s.title` -> `title`)
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.src_property_name.split('.').nth(1) {
            Some(name) if !name.is_empty() => name,
            _ => &self.src_property_name,
        }
    }
}

impl From<&PropertyValidationResult> for CoveragePropertyResult {
    fn from(record: &PropertyValidationResult) -> Self {
        Self {
            src_property_name: record.src_name.clone(),
            src_property_value: record.src_value.clone(),
            dst_property_name: record.dst_name.clone(),
            dst_property_value: record.dst_value.clone(),
            is_valid: record.is_valid,
            message: record.message.clone(),
        }
    }
}

/// Aggregate coverage of one definition kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageResult {
    /// First validated instance of the kind
    pub model: Definition,
    /// Fully qualified type name
    pub model_full_name: String,
    /// Type name, the report key
    pub model_short_name: String,
    /// Union of property rows across instances
    pub properties: Vec<CoveragePropertyResult>,
}

impl CoverageResult {
    /// Kind the result aggregates
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DefinitionKind {
        self.model.kind()
    }

    /// Check if every property row is valid
    #[must_use]
    pub fn is_fully_valid(&self) -> bool {
        self.properties.iter().all(|p| p.is_valid)
    }
}

/// Stateless reducer over validation results
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageAggregator;

impl CoverageAggregator {
    /// Create new aggregator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// One coverage result per kind, sorted by type name
    #[must_use]
    pub fn aggregate(&self, results: &[ModelValidationResult]) -> Vec<CoverageResult> {
        let mut groups: IndexMap<DefinitionKind, (&Definition, IndexSet<CoveragePropertyResult>)> =
            IndexMap::new();

        for result in results {
            let (_, properties) = groups
                .entry(result.kind())
                .or_insert_with(|| (&result.model, IndexSet::new()));
            properties.extend(result.properties.iter().map(CoveragePropertyResult::from));
        }

        let mut coverage: Vec<CoverageResult> = groups
            .into_iter()
            .map(|(kind, (model, properties))| CoverageResult {
                model: model.clone(),
                model_full_name: kind.full_type_name(),
                model_short_name: kind.type_name().to_string(),
                properties: properties.into_iter().collect(),
            })
            .collect();

        coverage.sort_by(|a, b| a.model_short_name.cmp(&b.model_short_name));
        tracing::debug!("Aggregated coverage for {} kinds", coverage.len());
        coverage
    }

    /// Aggregate into the report shape handed to serializers
    #[must_use]
    pub fn report(&self, results: &[ModelValidationResult]) -> CoverageReport {
        CoverageReport::from_results(self.aggregate(results))
    }
}

/// Type name to property rows, in stable order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CoverageReport {
    entries: BTreeMap<String, Vec<CoveragePropertyResult>>,
}

impl CoverageReport {
    /// Build report from aggregated results
    #[must_use]
    pub fn from_results(results: impl IntoIterator<Item = CoverageResult>) -> Self {
        let entries = results
            .into_iter()
            .map(|r| (r.model_short_name, r.properties))
            .collect();
        Self { entries }
    }

    /// Rows by type name
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, Vec<CoveragePropertyResult>> {
        &self.entries
    }

    /// Rows of one type
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&[CoveragePropertyResult]> {
        self.entries.get(type_name).map(Vec::as_slice)
    }

    /// Check if every row of every type is valid
    #[must_use]
    pub fn is_fully_valid(&self) -> bool {
        self.entries.values().flatten().all(|p| p.is_valid)
    }

    /// Properties never set on any instance, as `Type.property`
    ///
    /// These rows count as valid but nothing was compared; a property no
    /// handler reads yet shows up here.
    #[must_use]
    pub fn unset_properties(&self) -> Vec<String> {
        let mut unset = Vec::new();
        for (type_name, rows) in &self.entries {
            let names: IndexSet<&str> = rows.iter().map(CoveragePropertyResult::display_name).collect();
            for name in names {
                let never_set = rows
                    .iter()
                    .filter(|r| r.display_name() == name)
                    .all(CoveragePropertyResult::is_unset);
                if never_set {
                    unset.push(format!("{type_name}.{name}"));
                }
            }
        }
        unset
    }

    /// Number of types in the report
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if report is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rev_model::{FieldDefinition, WebDefinition};

    fn field(name: &str) -> Definition {
        Definition::Field(FieldDefinition {
            internal_name: Some(name.into()),
            ..FieldDefinition::default()
        })
    }

    fn record(name: &str, value: &str) -> PropertyValidationResult {
        PropertyValidationResult::compare(name, Some(value.into()), Some(value.into()))
    }

    #[test]
    fn same_kind_disjoint_properties_union() {
        let results = vec![
            ModelValidationResult::new(field("A"), vec![record("title", "A")]),
            ModelValidationResult::new(field("B"), vec![record("group", "Core")]),
        ];

        let coverage = CoverageAggregator::new().aggregate(&results);

        assert_eq!(coverage.len(), 1);
        assert_eq!(coverage[0].model, field("A"));
        let names: Vec<_> = coverage[0].properties.iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["title", "group"]);
    }

    #[test]
    fn exact_duplicates_collapse() {
        let results = vec![
            ModelValidationResult::new(field("A"), vec![record("required", "true")]),
            ModelValidationResult::new(field("B"), vec![record("required", "true")]),
        ];

        let coverage = CoverageAggregator::new().aggregate(&results);
        assert_eq!(coverage[0].properties.len(), 1);
    }

    #[test]
    fn sorted_by_type_name() {
        let results = vec![
            ModelValidationResult::new(Definition::Web(WebDefinition::default()), vec![]),
            ModelValidationResult::new(field("A"), vec![]),
        ];

        let coverage = CoverageAggregator::new().aggregate(&results);
        let names: Vec<_> = coverage.iter().map(|c| c.model_short_name.as_str()).collect();
        assert_eq!(names, vec!["FieldDefinition", "WebDefinition"]);
        assert_eq!(coverage[0].model_full_name, "rev_model::definition::FieldDefinition");
    }

    #[test]
    fn report_serializes_as_map() {
        let results = vec![ModelValidationResult::new(
            field("A"),
            vec![PropertyValidationResult::compare("title", Some("A".into()), None)],
        )];

        let report = CoverageAggregator::new().report(&results);
        assert!(!report.is_fully_valid());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["FieldDefinition"][0]["src_property_name"], "s.title");
        assert_eq!(json["FieldDefinition"][0]["is_valid"], false);
        assert!(json["FieldDefinition"][0]["dst_property_value"].is_null());
    }

    #[test]
    fn unset_properties_are_flagged() {
        let results = vec![
            ModelValidationResult::new(
                field("A"),
                vec![
                    PropertyValidationResult::compare("default_value", None, None),
                    PropertyValidationResult::compare("group", None, None),
                ],
            ),
            ModelValidationResult::new(field("B"), vec![record("group", "Core")]),
        ];

        let report = CoverageAggregator::new().report(&results);

        assert!(report.is_fully_valid());
        assert_eq!(report.unset_properties(), vec!["FieldDefinition.default_value"]);
    }

    #[test]
    fn display_name_strips_prefix() {
        let row = CoveragePropertyResult::from(&record("title", "A"));
        assert_eq!(row.display_name(), "title");

        let bare = CoveragePropertyResult {
            src_property_name: "Scope".into(),
            ..row
        };
        assert_eq!(bare.display_name(), "Scope");
    }
}
