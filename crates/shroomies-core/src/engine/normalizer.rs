//! Strain descriptor normalizer.
//!
//! Canonicalizes free-form strain input: case folding, whitespace trimming,
//! and exact-match abbreviation expansion. No fuzzy or typo correction;
//! unmatched input passes through unchanged as its own canonical form.

use std::collections::HashMap;

/// Normalizer for strain descriptors.
pub struct Normalizer {
    /// Abbreviation map: shorthand → canonical strain name
    abbreviations: HashMap<String, String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the default abbreviation table.
    pub fn new() -> Self {
        Self {
            abbreviations: Self::default_abbreviations(),
        }
    }

    /// Canonicalize a raw descriptor.
    ///
    /// Returns `None` for empty or whitespace-only input: "no descriptor"
    /// is a valid case, not an error.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        Some(self.abbreviations.get(&lowered).cloned().unwrap_or(lowered))
    }

    /// Register an extra abbreviation mapping.
    pub fn add_abbreviation(&mut self, shorthand: &str, canonical: &str) {
        self.abbreviations
            .insert(shorthand.to_lowercase(), canonical.to_lowercase());
    }

    /// Default shorthand expansions for common strain names.
    fn default_abbreviations() -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("pe".into(), "penis envy".into());
        map.insert("ape".into(), "albino penis envy".into());
        map.insert("gt".into(), "golden teacher".into());
        map.insert("jmf".into(), "jedi mind fuck".into());
        map.insert("tat".into(), "south african transkei".into());
        map.insert("gwm".into(), "great white monster".into());
        map.insert("nss".into(), "natal super strength".into());

        map
    }
}
