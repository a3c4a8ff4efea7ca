//! Physical-form conversion.

use crate::models::Form;
use crate::tables::ReferenceTables;

use super::{EngineError, EngineResult};

/// Converter from reference-form quantities into a requested form.
pub struct FormConverter<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> FormConverter<'a> {
    /// Create a converter over a set of reference tables.
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Convert a dried-gram quantity into the requested form.
    ///
    /// Returns the converted quantity and its unit label. A form with no
    /// conversion rule is a hard failure: there is no sane unit to report
    /// otherwise.
    pub fn convert(&self, reference_grams: f64, form: Form) -> EngineResult<(f64, String)> {
        let rule = self
            .tables
            .form_rule(form)
            .ok_or_else(|| EngineError::UnknownForm(form.as_str().to_string()))?;

        Ok((rule.apply(reference_grams), rule.unit.clone()))
    }
}
