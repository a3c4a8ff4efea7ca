//! Physical-form conversion rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Form;

/// Grams of fresh mushrooms per gram dried. Fresh mushrooms are mostly
/// water.
pub const FRESH_TO_DRIED_RATIO: f64 = 10.0;

/// Truffle potency relative to dried mushrooms.
pub const TRUFFLE_POTENCY_FACTOR: f64 = 0.3;

/// One constant-factor step of a form conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ConversionStep {
    MultiplyBy(f64),
    DivideBy(f64),
}

impl ConversionStep {
    fn apply(&self, quantity: f64) -> f64 {
        match self {
            ConversionStep::MultiplyBy(factor) => quantity * factor,
            ConversionStep::DivideBy(divisor) => quantity / divisor,
        }
    }
}

/// How a dried-gram quantity maps into one physical form.
///
/// A rule is an ordered sequence of constant-factor steps rather than a
/// single scalar: truffles first compensate for potency, then rescale to
/// fresh weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormRule {
    /// Steps applied in order to the reference quantity
    pub steps: Vec<ConversionStep>,
    /// Unit label reported with the converted quantity
    pub unit: String,
}

impl FormRule {
    /// Apply all steps in order.
    pub fn apply(&self, reference_grams: f64) -> f64 {
        self.steps
            .iter()
            .fold(reference_grams, |quantity, step| step.apply(quantity))
    }
}

/// Default conversion rules for the known forms.
pub(crate) fn default_form_rules() -> HashMap<Form, FormRule> {
    let mut map = HashMap::new();

    // Dried grams are the reference form
    map.insert(
        Form::Dried,
        FormRule {
            steps: Vec::new(),
            unit: "grams dried".into(),
        },
    );

    map.insert(
        Form::Fresh,
        FormRule {
            steps: vec![ConversionStep::MultiplyBy(FRESH_TO_DRIED_RATIO)],
            unit: "grams fresh".into(),
        },
    );

    // Truffles are less potent than dried mushrooms and measured fresh
    map.insert(
        Form::Truffles,
        FormRule {
            steps: vec![
                ConversionStep::DivideBy(TRUFFLE_POTENCY_FACTOR),
                ConversionStep::MultiplyBy(FRESH_TO_DRIED_RATIO),
            ],
            unit: "grams fresh truffles".into(),
        },
    );

    map
}
