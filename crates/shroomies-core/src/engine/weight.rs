//! Body-mass adjustment curve.

/// At or below this mass the factor bottoms out.
const LOWER_CLAMP_KG: f64 = 80.0;
/// Start of the no-adjustment plateau.
const PLATEAU_MIN_KG: f64 = 115.0;
/// End of the no-adjustment plateau.
const PLATEAU_MAX_KG: f64 = 250.0;
/// At or above this mass the factor tops out.
const UPPER_CLAMP_KG: f64 = 400.0;

/// Factor at the lower clamp.
const MIN_FACTOR: f64 = 0.8;
/// Factor at the upper clamp.
const MAX_FACTOR: f64 = 1.3;

/// Multiplicative dose adjustment for body mass.
///
/// Clamped piecewise-linear curve: 1.0 across the typical range, tapering
/// linearly to 0.8 below it and rising linearly to 1.3 above it. The two
/// tails are deliberately asymmetric. Total over all non-negative inputs;
/// callers are responsible for sane-range validation.
pub fn weight_factor(body_mass_kg: f64) -> f64 {
    if body_mass_kg < PLATEAU_MIN_KG {
        let clamped = body_mass_kg.max(LOWER_CLAMP_KG);
        MIN_FACTOR
            + (clamped - LOWER_CLAMP_KG) * (1.0 - MIN_FACTOR) / (PLATEAU_MIN_KG - LOWER_CLAMP_KG)
    } else if body_mass_kg > PLATEAU_MAX_KG {
        let clamped = body_mass_kg.min(UPPER_CLAMP_KG);
        1.0 + (clamped - PLATEAU_MAX_KG) * (MAX_FACTOR - 1.0) / (UPPER_CLAMP_KG - PLATEAU_MAX_KG)
    } else {
        1.0
    }
}
