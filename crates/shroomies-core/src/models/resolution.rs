//! Potency resolution models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Potency value at or below which a strain reads as mild.
pub const MILD_THRESHOLD: f64 = 6.0;

/// Potency value at or above which a strain reads as strong.
pub const STRONG_THRESHOLD: f64 = 9.0;

/// Display classification of a resolved potency value.
///
/// The thresholds are fixed and independent of the category table's own
/// numeric values: a named strain can classify as `Standard` for display
/// even when the table's `mild` entry sits elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotencyCategory {
    Mild,
    Standard,
    Strong,
}

impl PotencyCategory {
    /// Classify a potency value (mg psilocybin per gram dried).
    pub fn classify(value: f64) -> Self {
        if value <= MILD_THRESHOLD {
            PotencyCategory::Mild
        } else if value >= STRONG_THRESHOLD {
            PotencyCategory::Strong
        } else {
            PotencyCategory::Standard
        }
    }

    /// Canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PotencyCategory::Mild => "mild",
            PotencyCategory::Standard => "standard",
            PotencyCategory::Strong => "strong",
        }
    }
}

impl fmt::Display for PotencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a strain descriptor against the reference tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PotencyResolution {
    /// Canonical descriptor after normalization; `None` when the input was
    /// empty
    pub canonical: Option<String>,
    /// Resolved potency value (mg psilocybin per gram dried)
    pub value: f64,
    /// True only when the descriptor matched a named strain entry
    pub strain_recognized: bool,
    /// Display classification of the resolved value
    pub category: PotencyCategory,
}
