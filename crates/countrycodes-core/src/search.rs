// crates/countrycodes-core/src/search.rs
use crate::common::RegistryStats;
use crate::error::{CountryCodeError, Result};
use crate::model::{Assignment, CountryCode};
use crate::registry::Registry;
use crate::text::{dial_key, name_key};
use crate::traits::CountrySearch;

impl CountrySearch for Registry {
    fn stats(&self) -> RegistryStats {
        RegistryStats::from_records(&self.records)
    }

    fn get_by_alpha2(&self, code: &str) -> Option<&CountryCode> {
        self.by_alpha2.get(code).map(|&i| self.resolve(i))
    }

    fn get_by_alpha3(&self, code: &str) -> Option<&CountryCode> {
        self.by_alpha3.get(code).map(|&i| self.resolve(i))
    }

    fn get_by_name(&self, name: &str) -> Option<&CountryCode> {
        self.by_name.get(name).map(|&i| self.resolve(i))
    }

    fn get_by_numeric(&self, code: i32) -> Option<&CountryCode> {
        // Anything outside i16 cannot be a stored code.
        let code = i16::try_from(code).ok()?;
        self.by_numeric.get(&code).map(|&i| self.resolve(i))
    }

    fn get_by_code(&self, code: &str) -> Option<&CountryCode> {
        match code.len() {
            2 => self.get_by_alpha2(code),
            3 if code.bytes().all(|b| b.is_ascii_digit()) => {
                self.get_by_numeric(code.parse().ok()?)
            }
            3 | 4 => self.get_by_alpha3(code),
            _ => None,
        }
    }

    fn require(&self, code: &str) -> Result<&CountryCode> {
        self.get_by_code(code)
            .ok_or_else(|| CountryCodeError::NotFound(code.to_owned()))
    }

    fn find_by_name(&self, prefix: &str) -> Vec<&CountryCode> {
        self.name_trie
            .iter_prefix(&name_key(prefix))
            .map(|&i| self.resolve(i))
            .collect()
    }

    fn find_by_dialing_code(&self, prefix: &str) -> Vec<&CountryCode> {
        let q = dial_key(prefix);
        if q.is_empty() {
            return Vec::new();
        }

        // Linear scan is fine for a few hundred records.
        self.records
            .iter()
            .filter(|c| c.dialing_codes().any(|d| dial_key(d).starts_with(q)))
            .collect()
    }

    fn by_assignment(&self, assignment: Assignment) -> Vec<&CountryCode> {
        self.records
            .iter()
            .filter(|c| c.assignment == assignment)
            .collect()
    }
}
