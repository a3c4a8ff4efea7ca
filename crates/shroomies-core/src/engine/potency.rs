//! Potency resolution with category fallback.

use crate::models::{PotencyCategory, PotencyResolution};
use crate::tables::ReferenceTables;

/// Resolver mapping canonical descriptors to potency values.
pub struct PotencyResolver<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> PotencyResolver<'a> {
    /// Create a resolver over a set of reference tables.
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Resolve a canonical descriptor (or the no-descriptor sentinel).
    ///
    /// Lookup order, first match wins: category table, then named strains,
    /// then fallback to the standard category. "Not found" is reported
    /// through `strain_recognized`, never raised.
    pub fn resolve(&self, canonical: Option<&str>) -> PotencyResolution {
        let standard = self.tables.standard_potency();

        let (value, strain_recognized) = match canonical {
            None => (standard, false),
            Some(name) => {
                if let Some(value) = self.tables.category_potency(name) {
                    (value, false)
                } else if let Some(value) = self.tables.strain_potency(name) {
                    (value, true)
                } else {
                    (standard, false)
                }
            }
        };

        PotencyResolution {
            canonical: canonical.map(str::to_owned),
            value,
            strain_recognized,
            category: PotencyCategory::classify(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_resolves_to_standard() {
        let tables = ReferenceTables::default();
        let resolver = PotencyResolver::new(&tables);

        let resolution = resolver.resolve(None);
        assert_eq!(resolution.value, 7.0);
        assert!(!resolution.strain_recognized);
        assert_eq!(resolution.category, PotencyCategory::Standard);
        assert_eq!(resolution.canonical, None);
    }

    #[test]
    fn test_category_lookup_wins_over_fallback() {
        let tables = ReferenceTables::default();
        let resolver = PotencyResolver::new(&tables);

        let mild = resolver.resolve(Some("mild"));
        assert_eq!(mild.value, 5.0);
        assert!(!mild.strain_recognized);
        assert_eq!(mild.category, PotencyCategory::Mild);

        let strong = resolver.resolve(Some("strong"));
        assert_eq!(strong.value, 10.0);
        assert_eq!(strong.category, PotencyCategory::Strong);
    }

    #[test]
    fn test_strain_lookup_sets_recognized() {
        let tables = ReferenceTables::default();
        let resolver = PotencyResolver::new(&tables);

        let resolution = resolver.resolve(Some("penis envy"));
        assert_eq!(resolution.value, 11.0);
        assert!(resolution.strain_recognized);
        assert_eq!(resolution.category, PotencyCategory::Strong);
        assert_eq!(resolution.canonical.as_deref(), Some("penis envy"));
    }

    #[test]
    fn test_unknown_falls_back_to_standard() {
        let tables = ReferenceTables::default();
        let resolver = PotencyResolver::new(&tables);

        let resolution = resolver.resolve(Some("zzz-unknown"));
        assert_eq!(resolution.value, 7.0);
        assert!(!resolution.strain_recognized);
        assert_eq!(resolution.category, PotencyCategory::Standard);
    }

    #[test]
    fn test_classification_uses_fixed_thresholds() {
        let tables = ReferenceTables::default();
        let resolver = PotencyResolver::new(&tables);

        // Value 6.0 sits on the mild boundary even though the category
        // table's own mild entry is 5.0.
        let resolution = resolver.resolve(Some("golden teacher"));
        assert_eq!(resolution.value, 6.0);
        assert_eq!(resolution.category, PotencyCategory::Mild);

        // 8.5 is below the strong threshold
        let resolution = resolver.resolve(Some("mckennaii"));
        assert_eq!(resolution.category, PotencyCategory::Standard);
    }
}
