// crates/countrycodes-core/src/registry.rs

//! # Registry
//!
//! Owns the canonical records and every index derived from them. Built once,
//! read many times, never mutated.

use crate::data::COUNTRY_CODES;
use crate::model::CountryCode;
use crate::text::name_key;
use crate::traits::CountrySearch;
use crate::trie::PrefixTrie;
use once_cell::sync::Lazy;
use std::collections::hash_map::{Entry, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace, warn};

// Single in-process instance so the indexes are only built once per process.
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// The country code registry.
///
/// Indexes store positions into `records`, so every accessor hands out
/// references into one table.
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) records: Vec<CountryCode>,
    pub(crate) by_alpha2: HashMap<&'static str, usize>,
    pub(crate) by_alpha3: HashMap<&'static str, usize>,
    pub(crate) by_name: HashMap<&'static str, usize>,
    pub(crate) by_numeric: HashMap<i16, usize>,
    pub(crate) name_trie: PrefixTrie<usize>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Build a fresh registry from the compiled-in ISO-3166-1 table.
    pub fn new() -> Self {
        Self::from_records(COUNTRY_CODES)
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    /// Build a registry from an arbitrary record list.
    ///
    /// Records are indexed in the given order. When two records share an
    /// alpha-3 code, name or numeric code, the later one takes the slot
    /// unless the held record has a stronger [`Assignment::precedence`].
    /// Empty alpha-3 codes and the numeric `-1` are not indexed.
    ///
    /// [`Assignment::precedence`]: crate::Assignment::precedence
    pub fn from_records(records: impl IntoIterator<Item = CountryCode>) -> Self {
        let records: Vec<CountryCode> = records.into_iter().collect();

        let mut by_alpha2 = HashMap::with_capacity(records.len());
        let mut by_alpha3 = HashMap::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_numeric = HashMap::with_capacity(records.len());
        let mut name_trie = PrefixTrie::new();

        for (idx, record) in records.iter().enumerate() {
            if let Some(prev) = by_alpha2.insert(record.alpha2, idx) {
                warn!(
                    alpha2 = record.alpha2,
                    dropped = records[prev].name,
                    kept = record.name,
                    "duplicate alpha-2 code"
                );
            }
            if let Some(alpha3) = record.alpha3() {
                index_by_precedence(&mut by_alpha3, &records, "alpha3", alpha3, idx);
            }
            index_by_precedence(&mut by_name, &records, "name", record.name, idx);
            if record.numeric().is_some() {
                index_by_precedence(&mut by_numeric, &records, "numeric", record.numeric, idx);
            }
            name_trie.insert(&name_key(record.name), idx);
        }

        debug!(
            records = records.len(),
            alpha3 = by_alpha3.len(),
            names = by_name.len(),
            numeric = by_numeric.len(),
            "country code registry built"
        );

        Self {
            records,
            by_alpha2,
            by_alpha3,
            by_name,
            by_numeric,
            name_trie,
        }
    }

    /// All records in table order (sorted by alpha-2 for the built-in data).
    pub fn records(&self) -> &[CountryCode] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn resolve(&self, idx: usize) -> &CountryCode {
        &self.records[idx]
    }
}

fn index_by_precedence<K>(
    index: &mut HashMap<K, usize>,
    records: &[CountryCode],
    kind: &'static str,
    key: K,
    idx: usize,
) where
    K: Eq + Hash + Debug,
{
    match index.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(idx);
        }
        Entry::Occupied(mut slot) => {
            let held = &records[*slot.get()];
            let incoming = &records[idx];
            let replace = incoming.assignment.precedence() >= held.assignment.precedence();
            let (kept, dropped) = if replace {
                (incoming, held)
            } else {
                (held, incoming)
            };
            trace!(
                index = kind,
                key = ?slot.key(),
                kept = kept.alpha2,
                dropped = dropped.alpha2,
                "index collision"
            );
            if replace {
                slot.insert(idx);
            }
        }
    }
}

/// Look up an alpha-2 code in the global registry.
pub fn get_by_alpha2(code: &str) -> Option<&'static CountryCode> {
    Registry::global().get_by_alpha2(code)
}

/// Look up an alpha-3 code in the global registry.
pub fn get_by_alpha3(code: &str) -> Option<&'static CountryCode> {
    Registry::global().get_by_alpha3(code)
}

/// Look up an exact display name in the global registry.
pub fn get_by_name(name: &str) -> Option<&'static CountryCode> {
    Registry::global().get_by_name(name)
}

/// Look up a numeric code in the global registry.
pub fn get_by_numeric(code: i32) -> Option<&'static CountryCode> {
    Registry::global().get_by_numeric(code)
}

/// Case-insensitive name prefix search in the global registry.
pub fn find_by_name(prefix: &str) -> Vec<&'static CountryCode> {
    Registry::global().find_by_name(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Assignment::*;

    fn tiny() -> Registry {
        Registry::from_records([
            CountryCode::new("Finland", "FI", "FIN", 246, "+358", OfficiallyAssigned),
            CountryCode::new("Fiji", "FJ", "FJI", 242, "+679", OfficiallyAssigned),
            CountryCode::new("Finland", "SF", "FIN", 246, "+358", TransitionallyReserved),
            CountryCode::new("East Timor", "TP", "TPTL", 0, "+670", TransitionallyReserved),
            CountryCode::new("Zaire", "ZR", "ZRCD", 0, "+243", TransitionallyReserved),
            CountryCode::new("European Union", "EU", "", -1, "+388", ExceptionallyReserved),
            CountryCode::new("Tristan da Cunha", "TA", "TAA", -1, "+290", ExceptionallyReserved),
        ])
    }

    #[test]
    fn stronger_assignment_keeps_its_slot() {
        let reg = tiny();
        assert_eq!(reg.get_by_alpha3("FIN").unwrap().alpha2, "FI");
        assert_eq!(reg.get_by_name("Finland").unwrap().alpha2, "FI");
        assert_eq!(reg.get_by_numeric(246).unwrap().alpha2, "FI");
    }

    #[test]
    fn stronger_assignment_takes_over_a_weaker_slot() {
        let reg = Registry::from_records([
            CountryCode::new("Burma", "BU", "BUMM", 104, "+95", TransitionallyReserved),
            CountryCode::new("Myanmar", "MM", "MMR", 104, "+95", OfficiallyAssigned),
        ]);
        assert_eq!(reg.get_by_numeric(104).unwrap().alpha2, "MM");
    }

    #[test]
    fn equal_assignment_is_last_write_wins() {
        let reg = tiny();
        assert_eq!(reg.get_by_numeric(0).unwrap().alpha2, "ZR");
    }

    #[test]
    fn sentinels_are_not_indexed() {
        let reg = tiny();
        assert!(reg.get_by_numeric(-1).is_none());
        assert!(reg.get_by_alpha3("").is_none());
        assert_eq!(reg.by_numeric.len(), 3);
        assert_eq!(reg.by_alpha3.len(), 5);
    }

    #[test]
    fn trie_keeps_every_record() {
        let reg = tiny();
        assert_eq!(reg.name_trie.len(), reg.len());
        let finland: Vec<_> = reg.find_by_name("FINLAND").iter().map(|c| c.alpha2).collect();
        assert_eq!(finland, ["FI", "SF"]);
    }

    #[test]
    fn duplicate_alpha2_is_last_write_wins() {
        let reg = Registry::from_records([
            CountryCode::new("Old", "XX", "", -1, "", UserAssigned),
            CountryCode::new("New", "XX", "", -1, "", UserAssigned),
        ]);
        assert_eq!(reg.get_by_alpha2("XX").unwrap().name, "New");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn empty_registry_finds_nothing() {
        let reg = Registry::from_records(Vec::new());
        assert!(reg.is_empty());
        assert!(reg.find_by_name("").is_empty());
        assert!(reg.get_by_alpha2("FI").is_none());
    }

    #[test]
    fn global_registry_is_built_once() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
        assert_eq!(Registry::global().len(), COUNTRY_CODES.len());
    }
}
