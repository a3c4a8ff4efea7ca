//! Calculation result record.

use serde::{Deserialize, Serialize};

use super::PotencyCategory;

/// Final output of a dose calculation.
///
/// Created fresh per calculation and never mutated afterwards; quantities
/// are pre-rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoseResult {
    /// Recommended dose in the requested form, rounded to 2 decimals
    pub dose_grams: f64,
    /// Unit label for the requested form (e.g. "grams dried")
    pub unit: String,
    /// Display classification of the resolved potency
    pub potency_category: PotencyCategory,
    /// Whether the strain descriptor matched a named table entry
    pub strain_recognized: bool,
    /// Canonical descriptor used for the lookup; echoes the raw input when
    /// normalization produced no descriptor
    pub canonical_strain: String,
    /// Body-mass adjustment factor, rounded to 2 decimals
    pub weight_factor: f64,
}

impl DoseResult {
    /// Serialize as JSON for a front end.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
