//! The dose calculation pipeline.
//!
//! Pipeline: Name Normalizer → Potency Resolver → Weight Adjuster →
//! Dose Composer → Form Converter

mod composer;
mod converter;
mod normalizer;
mod potency;
mod weight;

pub use composer::*;
pub use converter::*;
pub use normalizer::*;
pub use potency::*;
pub use weight::*;

use thiserror::Error;

use crate::models::{DoseRequest, DoseResult};
use crate::tables::ReferenceTables;

/// Engine errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Unknown mushroom form: {0}")]
    UnknownForm(String),

    #[error("Unknown intensity level: {0}")]
    UnknownLevel(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Main engine that coordinates the full pipeline.
///
/// Borrows its reference tables; the engine itself holds no mutable state
/// and every calculation is independent.
pub struct DoseEngine<'a> {
    tables: &'a ReferenceTables,
    normalizer: Normalizer,
    resolver: PotencyResolver<'a>,
    converter: FormConverter<'a>,
}

impl<'a> DoseEngine<'a> {
    /// Create an engine over a set of reference tables.
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self {
            tables,
            normalizer: Normalizer::new(),
            resolver: PotencyResolver::new(tables),
            converter: FormConverter::new(tables),
        }
    }

    /// Calculate a recommended dose.
    pub fn calculate(&self, request: &DoseRequest) -> EngineResult<DoseResult> {
        // Step 1: Canonicalize the strain descriptor
        let canonical = self.normalizer.normalize(&request.strain);

        // Step 2: Resolve potency with category fallback
        let resolution = self.resolver.resolve(canonical.as_deref());

        // Step 3: Body-mass adjustment
        let factor = weight_factor(request.body_mass_kg);

        // Step 4: Compose the reference-form dose
        let reference_dose = compose_reference_dose(
            self.tables.base_dose(request.level),
            factor,
            resolution.value,
            self.tables.standard_potency(),
        );

        // Step 5: Convert into the requested form
        let (converted, unit) = self.converter.convert(reference_dose, request.form)?;
        let dose_grams = match self.tables.dose_floor() {
            Some(floor) => converted.max(floor),
            None => converted,
        };

        Ok(DoseResult {
            dose_grams: round2(dose_grams),
            unit,
            potency_category: resolution.category,
            strain_recognized: resolution.strain_recognized,
            canonical_strain: resolution
                .canonical
                .unwrap_or_else(|| request.strain.clone()),
            weight_factor: round2(factor),
        })
    }

    /// Canonical strain names known to the tables, lexicographically
    /// ordered, for display/browsing by a front end.
    pub fn known_strains(&self) -> Vec<&str> {
        self.tables.known_strains()
    }

    /// Get the normalizer for direct access.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// The reference tables this engine reads from.
    pub fn tables(&self) -> &ReferenceTables {
        self.tables
    }
}

/// Round to 2 decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Form, IntensityLevel, PotencyCategory};

    #[test]
    fn test_calculate_baseline() {
        let tables = ReferenceTables::default();
        let engine = DoseEngine::new(&tables);

        let request = DoseRequest::new(Form::Dried, IntensityLevel::Low, "standard", 150.0);
        let result = engine.calculate(&request).unwrap();

        assert_eq!(result.dose_grams, 1.0);
        assert_eq!(result.unit, "grams dried");
        assert_eq!(result.weight_factor, 1.0);
        assert_eq!(result.potency_category, PotencyCategory::Standard);
        assert!(!result.strain_recognized);
    }

    #[test]
    fn test_calculate_expands_abbreviation() {
        let tables = ReferenceTables::default();
        let engine = DoseEngine::new(&tables);

        let request = DoseRequest::new(Form::Dried, IntensityLevel::Normal, "GT", 150.0);
        let result = engine.calculate(&request).unwrap();

        assert_eq!(result.canonical_strain, "golden teacher");
        assert!(result.strain_recognized);
        assert_eq!(result.potency_category, PotencyCategory::Mild);
        assert!((result.dose_grams - 2.14).abs() < 0.001);
    }

    #[test]
    fn test_calculate_empty_strain_echoes_input() {
        let tables = ReferenceTables::default();
        let engine = DoseEngine::new(&tables);

        let request = DoseRequest::new(Form::Dried, IntensityLevel::Low, "", 150.0);
        let result = engine.calculate(&request).unwrap();

        assert_eq!(result.canonical_strain, "");
        assert!(!result.strain_recognized);
        assert_eq!(result.dose_grams, 1.0);
    }

    #[test]
    fn test_calculate_missing_form_rule_fails() {
        let mut tables = ReferenceTables::default();
        tables.remove_form_rule(Form::Fresh);
        let engine = DoseEngine::new(&tables);

        let request = DoseRequest::new(Form::Fresh, IntensityLevel::Low, "standard", 150.0);
        let err = engine.calculate(&request).unwrap_err();

        assert_eq!(err, EngineError::UnknownForm("fresh".into()));
    }

    #[test]
    fn test_dose_floor_clamps_before_rounding() {
        let mut tables = ReferenceTables::default();
        tables.set_dose_floor(Some(0.5));
        let engine = DoseEngine::new(&tables);

        // 0.3 * 1.0 * (5.0 / 7.0) ≈ 0.214, below the floor
        let request = DoseRequest::new(Form::Dried, IntensityLevel::Micro, "mild", 150.0);
        let result = engine.calculate(&request).unwrap();

        assert_eq!(result.dose_grams, 0.5);
    }

    #[test]
    fn test_known_strains_for_browsing() {
        let tables = ReferenceTables::default();
        let engine = DoseEngine::new(&tables);

        let strains = engine.known_strains();
        assert_eq!(strains.len(), 36);
        assert!(strains.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.142857), 2.14);
        assert_eq!(round2(55.25), 55.25);
        assert_eq!(round2(0.215510), 0.22);
        assert_eq!(round2(1.0), 1.0);
    }
}
