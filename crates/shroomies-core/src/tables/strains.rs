//! Named strain potency table.

use std::collections::HashMap;

/// Default strain potencies, in mg psilocybin per gram dried weight.
///
/// Keys are canonical: lowercase, whitespace-trimmed.
pub(crate) fn default_strains() -> HashMap<String, f64> {
    let mut map = HashMap::new();

    // Milder varieties
    map.insert("mazatapec".into(), 5.0);
    map.insert("b+".into(), 5.5);
    map.insert("mexican".into(), 5.5);
    map.insert("pf classic".into(), 5.5);
    map.insert("golden teacher".into(), 6.0);
    map.insert("ecuador".into(), 6.0);
    map.insert("amazon".into(), 6.0);
    map.insert("costa rican".into(), 6.0);

    // Mid-range varieties
    map.insert("thai".into(), 6.5);
    map.insert("treasure coast".into(), 6.5);
    map.insert("alcabenzi".into(), 6.5);
    map.insert("pink buffalo".into(), 6.5);
    map.insert("cambodian".into(), 7.0);
    map.insert("rusty whyte".into(), 7.0);
    map.insert("puerto rican".into(), 7.0);
    map.insert("orissa india".into(), 7.0);
    map.insert("golden mammoth".into(), 7.0);
    map.insert("hawaiian".into(), 7.5);
    map.insert("ghost".into(), 7.5);
    map.insert("albino louisiana".into(), 7.5);
    map.insert("redboy".into(), 7.5);
    map.insert("liberty cap".into(), 8.0);
    map.insert("albino a+".into(), 8.0);
    map.insert("south african transkei".into(), 8.0);
    map.insert("jedi mind fuck".into(), 8.5);
    map.insert("great white monster".into(), 8.5);
    map.insert("mckennaii".into(), 8.5);

    // High-potency varieties
    map.insert("blue meanie".into(), 9.0);
    map.insert("white rabbit".into(), 9.0);
    map.insert("syzygy".into(), 9.5);
    map.insert("natal super strength".into(), 9.5);
    map.insert("trinity".into(), 10.0);
    map.insert("tidal wave".into(), 10.5);
    map.insert("penis envy".into(), 11.0);
    map.insert("albino penis envy".into(), 12.0);
    map.insert("enigma".into(), 12.5);

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size_and_keys_canonical() {
        let strains = default_strains();
        assert_eq!(strains.len(), 36);

        for key in strains.keys() {
            assert_eq!(key, &key.trim().to_lowercase(), "key {:?} not canonical", key);
        }
    }

    #[test]
    fn test_reference_entries() {
        let strains = default_strains();
        assert_eq!(strains.get("golden teacher"), Some(&6.0));
        assert_eq!(strains.get("penis envy"), Some(&11.0));
        assert_eq!(strains.get("enigma"), Some(&12.5));
        assert_eq!(strains.get("liberty cap"), Some(&8.0));
    }
}
