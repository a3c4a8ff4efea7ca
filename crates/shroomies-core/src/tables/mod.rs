//! Immutable reference tables backing the dose engine.
//!
//! Tables are constructed once at process start (optionally customized
//! through the mutators below) and then passed by reference into
//! [`DoseEngine`](crate::engine::DoseEngine). After injection they are only
//! ever read.

mod forms;
mod strains;

pub use forms::*;

use std::collections::HashMap;

use crate::models::{Form, IntensityLevel};

/// General potency categories (mg psilocybin per gram dried).
///
/// A fixed small set, in a namespace disjoint from the named strains.
/// `standard` is the designated reference category: its value is the
/// divisor for potency-factor normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    pub mild: f64,
    pub standard: f64,
    pub strong: f64,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            mild: 5.0,
            standard: 7.0,
            strong: 10.0,
        }
    }
}

impl CategoryTable {
    /// Look up a category by its label.
    pub fn get(&self, label: &str) -> Option<f64> {
        match label {
            "mild" => Some(self.mild),
            "standard" => Some(self.standard),
            "strong" => Some(self.strong),
            _ => None,
        }
    }

    /// The category labels, in ascending potency order.
    pub fn labels() -> [&'static str; 3] {
        ["mild", "standard", "strong"]
    }
}

/// Base dose in dried grams for each intensity level.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseLevels {
    pub micro: f64,
    pub low: f64,
    pub normal: f64,
    pub high: f64,
}

impl Default for DoseLevels {
    fn default() -> Self {
        Self {
            micro: 0.3,
            low: 1.0,
            normal: 2.5,
            high: 4.25,
        }
    }
}

impl DoseLevels {
    /// Base dose for a level. Total by construction.
    pub fn base_dose(&self, level: IntensityLevel) -> f64 {
        match level {
            IntensityLevel::Micro => self.micro,
            IntensityLevel::Low => self.low,
            IntensityLevel::Normal => self.normal,
            IntensityLevel::High => self.high,
        }
    }
}

/// Reference data for one engine configuration.
///
/// The default configuration carries the canonical rule set; divergent
/// variants (different base doses, strain tables, or a dose floor) are
/// expressed by customizing a table before injecting it, not by forking
/// the engine.
pub struct ReferenceTables {
    /// Canonical strain name → potency value
    strains: HashMap<String, f64>,
    categories: CategoryTable,
    dose_levels: DoseLevels,
    form_rules: HashMap<Form, FormRule>,
    /// Minimum reportable quantity, applied before rounding when set
    dose_floor: Option<f64>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            strains: strains::default_strains(),
            categories: CategoryTable::default(),
            dose_levels: DoseLevels::default(),
            form_rules: forms::default_form_rules(),
            dose_floor: None,
        }
    }
}

impl ReferenceTables {
    /// Create tables with the canonical reference data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Potency of a named strain, if present.
    pub fn strain_potency(&self, canonical_name: &str) -> Option<f64> {
        self.strains.get(canonical_name).copied()
    }

    /// Potency of a general category, if present.
    pub fn category_potency(&self, label: &str) -> Option<f64> {
        self.categories.get(label)
    }

    /// Value of the designated standard category.
    pub fn standard_potency(&self) -> f64 {
        self.categories.standard
    }

    /// The category table.
    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Base dose in dried grams for an intensity level.
    pub fn base_dose(&self, level: IntensityLevel) -> f64 {
        self.dose_levels.base_dose(level)
    }

    /// Conversion rule for a physical form, if present.
    pub fn form_rule(&self, form: Form) -> Option<&FormRule> {
        self.form_rules.get(&form)
    }

    /// Minimum reportable quantity, if this configuration specifies one.
    pub fn dose_floor(&self) -> Option<f64> {
        self.dose_floor
    }

    /// Canonical strain names, lexicographically ordered.
    pub fn known_strains(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strains.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Add or replace a named strain entry.
    ///
    /// Keys are case-insensitive and whitespace-trimmed.
    pub fn add_strain(&mut self, name: &str, potency_value: f64) {
        self.strains.insert(name.trim().to_lowercase(), potency_value);
    }

    /// Replace the base doses (variant configuration).
    pub fn set_dose_levels(&mut self, levels: DoseLevels) {
        self.dose_levels = levels;
    }

    /// Add or replace a form conversion rule.
    pub fn add_form_rule(&mut self, form: Form, rule: FormRule) {
        self.form_rules.insert(form, rule);
    }

    /// Remove a form conversion rule (variant configurations may not offer
    /// every form).
    pub fn remove_form_rule(&mut self, form: Form) -> Option<FormRule> {
        self.form_rules.remove(&form)
    }

    /// Set or clear the minimum reportable quantity.
    pub fn set_dose_floor(&mut self, floor_grams: Option<f64>) {
        self.dose_floor = floor_grams;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_sane() {
        let tables = ReferenceTables::default();

        // Every potency entry is positive
        for name in tables.known_strains() {
            let potency = tables.strain_potency(name).unwrap();
            assert!(potency > 0.0, "strain {} has non-positive potency", name);
        }

        // Every category and base dose is positive
        for label in CategoryTable::labels() {
            assert!(tables.category_potency(label).unwrap() > 0.0);
        }
        for level in IntensityLevel::ALL {
            assert!(tables.base_dose(level) > 0.0);
        }

        // Every known form has a rule
        for form in Form::ALL {
            assert!(tables.form_rule(form).is_some());
        }

        assert_eq!(tables.standard_potency(), 7.0);
        assert_eq!(tables.dose_floor(), None);
    }

    #[test]
    fn test_known_strains_sorted() {
        let tables = ReferenceTables::default();
        let strains = tables.known_strains();

        assert_eq!(strains.len(), 36);
        assert!(strains.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(strains.contains(&"golden teacher"));
        assert!(strains.contains(&"enigma"));
    }

    #[test]
    fn test_category_namespace_disjoint_from_strains() {
        let tables = ReferenceTables::default();
        for label in CategoryTable::labels() {
            assert!(tables.strain_potency(label).is_none());
        }
    }

    #[test]
    fn test_add_strain_normalizes_key() {
        let mut tables = ReferenceTables::default();
        tables.add_strain("  Koh Samui  ", 7.5);
        assert_eq!(tables.strain_potency("koh samui"), Some(7.5));
    }

    #[test]
    fn test_variant_configuration() {
        let mut tables = ReferenceTables::default();
        tables.set_dose_floor(Some(0.5));
        tables.set_dose_levels(DoseLevels {
            micro: 0.2,
            low: 1.0,
            normal: 2.0,
            high: 3.5,
        });
        tables.remove_form_rule(Form::Truffles);

        assert_eq!(tables.dose_floor(), Some(0.5));
        assert_eq!(tables.base_dose(IntensityLevel::High), 3.5);
        assert!(tables.form_rule(Form::Truffles).is_none());
        assert!(tables.form_rule(Form::Dried).is_some());
    }
}
