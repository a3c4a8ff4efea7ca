//! Body-mass unit helpers.
//!
//! Front ends normalize user-entered pounds to kilograms before calling
//! the engine; the engine itself works in kilograms only.

/// Kilograms per pound.
pub const KG_PER_POUND: f64 = 0.453592;

/// Pounds per kilogram.
pub const POUNDS_PER_KG: f64 = 2.20462;

/// Convert pounds to kilograms.
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

/// Convert kilograms to pounds.
pub fn kg_to_pounds(kg: f64) -> f64 {
    kg * POUNDS_PER_KG
}
