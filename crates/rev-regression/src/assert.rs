//! Declarative property assertions
//!
//! Validators list the property pairs they compare; the chain reads each
//! side through a plain accessor, canonicalizes both values and records one
//! [`PropertyValidationResult`] per pair.
//!
//! ```rust
//! use rev_model::WebDefinition;
//! use rev_regression::ModelAssert;
//!
//! let src = WebDefinition { title: Some("News".into()), ..WebDefinition::default() };
//! let dst = src.clone();
//!
//! let records = ModelAssert::new(&src, &dst)
//!     .should_be_equal("title", |s| s.title.clone(), |d| d.title.clone())
//!     .finish();
//! assert!(records[0].is_valid);
//! ```

use crate::record::PropertyValidationResult;
use rev_model::PropertyValue;

/// Assertion chain over one original/reversed definition pair
#[derive(Debug)]
pub struct ModelAssert<'a, S, D> {
    src: &'a S,
    dst: &'a D,
    properties: Vec<PropertyValidationResult>,
}

impl<'a, S, D> ModelAssert<'a, S, D> {
    /// Start a chain over `src` (original) and `dst` (reversed)
    #[inline]
    #[must_use]
    pub fn new(src: &'a S, dst: &'a D) -> Self {
        Self {
            src,
            dst,
            properties: Vec::new(),
        }
    }

    /// Compare property `name` read through `src_get` and `dst_get`
    #[must_use]
    pub fn should_be_equal<VS, VD>(
        mut self,
        name: &str,
        src_get: impl Fn(&S) -> Option<VS>,
        dst_get: impl Fn(&D) -> Option<VD>,
    ) -> Self
    where
        VS: Into<PropertyValue>,
        VD: Into<PropertyValue>,
    {
        let src_value = src_get(self.src).map(|v| v.into().canonical());
        let dst_value = dst_get(self.dst).map(|v| v.into().canonical());

        let record = PropertyValidationResult::compare(name, src_value, dst_value);
        if !record.is_valid {
            tracing::debug!(
                "Property {} invalid: {}",
                name,
                record.message.as_deref().unwrap_or_default()
            );
        }
        self.properties.push(record);
        self
    }

    /// Records collected so far, in declaration order
    #[must_use]
    pub fn finish(self) -> Vec<PropertyValidationResult> {
        self.properties
    }
}
