//! Calculation request inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Physical form the dose should be reported in.
///
/// Dried grams are the reference form; every other form is converted
/// relative to it by the tables' conversion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    /// Dried mushrooms (reference form)
    Dried,
    /// Fresh (undried) mushrooms
    Fresh,
    /// Fresh sclerotia ("magic truffles")
    Truffles,
}

impl Form {
    /// All known forms, for menu construction by front ends.
    pub const ALL: [Form; 3] = [Form::Dried, Form::Fresh, Form::Truffles];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Form::Dried => "dried",
            Form::Fresh => "fresh",
            Form::Truffles => "truffles",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Form {
    type Err = EngineError;

    /// An unrecognized form name is a hard failure, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dried" => Ok(Form::Dried),
            "fresh" => Ok(Form::Fresh),
            "truffles" => Ok(Form::Truffles),
            other => Err(EngineError::UnknownForm(other.to_string())),
        }
    }
}

/// Desired intensity of the experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Micro,
    Low,
    Normal,
    High,
}

impl IntensityLevel {
    /// All levels, in ascending order of intensity.
    pub const ALL: [IntensityLevel; 4] = [
        IntensityLevel::Micro,
        IntensityLevel::Low,
        IntensityLevel::Normal,
        IntensityLevel::High,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::Micro => "micro",
            IntensityLevel::Low => "low",
            IntensityLevel::Normal => "normal",
            IntensityLevel::High => "high",
        }
    }

    /// Human-readable blurb for menus and help text.
    pub fn description(&self) -> &'static str {
        match self {
            IntensityLevel::Micro => "Sub-perceptual dose for enhanced mood and focus",
            IntensityLevel::Low => "Light effects, mild euphoria, enhanced creativity",
            IntensityLevel::Normal => "Moderate psychedelic effects, visual enhancement",
            IntensityLevel::High => "Strong psychedelic experience, intense visuals",
        }
    }

    /// Expected duration of effects at this level.
    pub fn duration_hint(&self) -> &'static str {
        match self {
            IntensityLevel::Micro => "3-6 hours (subtle effects)",
            IntensityLevel::Low => "4-6 hours (mild effects)",
            IntensityLevel::Normal => "4-8 hours (moderate effects)",
            IntensityLevel::High => "6-10 hours (intense effects)",
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntensityLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "micro" => Ok(IntensityLevel::Micro),
            "low" => Ok(IntensityLevel::Low),
            "normal" => Ok(IntensityLevel::Normal),
            "high" => Ok(IntensityLevel::High),
            other => Err(EngineError::UnknownLevel(other.to_string())),
        }
    }
}

/// A single dose calculation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoseRequest {
    /// Physical form to report the dose in
    pub form: Form,
    /// Desired intensity level
    pub level: IntensityLevel,
    /// Free-form strain name or potency category; empty means "not specified"
    pub strain: String,
    /// Body mass in kilograms
    pub body_mass_kg: f64,
}

impl DoseRequest {
    /// Create a request with the given inputs.
    pub fn new(
        form: Form,
        level: IntensityLevel,
        strain: impl Into<String>,
        body_mass_kg: f64,
    ) -> Self {
        Self {
            form,
            level,
            strain: strain.into(),
            body_mass_kg,
        }
    }
}
