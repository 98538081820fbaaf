// crates/countrycodes-core/src/traits.rs
use crate::common::RegistryStats;
use crate::error::Result;
use crate::model::{Assignment, CountryCode};

/// The lookup surface of the registry.
///
/// Exact lookups are case-sensitive and never normalize their input; a miss
/// is `None`, never an error. Only [`CountrySearch::find_by_name`] folds case.
pub trait CountrySearch {
    fn stats(&self) -> RegistryStats;

    /// Find a record by its two-letter code, e.g. `"DE"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use countrycodes_core::{CountrySearch, Registry};
    ///
    /// let registry = Registry::global();
    /// let de = registry.get_by_alpha2("DE").unwrap();
    /// assert_eq!(de.alpha3, "DEU");
    ///
    /// // No case folding.
    /// assert!(registry.get_by_alpha2("de").is_none());
    /// ```
    fn get_by_alpha2(&self, code: &str) -> Option<&CountryCode>;

    /// Find a record by its three-letter code (or four-letter formerly used
    /// code), e.g. `"DEU"` or `"YUCS"`.
    fn get_by_alpha3(&self, code: &str) -> Option<&CountryCode>;

    /// Find a record by its exact display name.
    ///
    /// Some names belong to more than one record (a current code and a
    /// reserved one); the officially assigned record is returned.
    fn get_by_name(&self, name: &str) -> Option<&CountryCode>;

    /// Find a record by numeric code. `-1` never matches.
    fn get_by_numeric(&self, code: i32) -> Option<&CountryCode>;

    /// Dispatch on the shape of `code`: two characters are an alpha-2 code,
    /// three ASCII digits a numeric code, three or four characters an alpha-3
    /// code.
    fn get_by_code(&self, code: &str) -> Option<&CountryCode>;

    /// Like [`CountrySearch::get_by_code`] but a miss is an error.
    fn require(&self, code: &str) -> Result<&CountryCode>;

    /// All records whose lowercased name starts with the lowercased `prefix`.
    ///
    /// Results come in lexicographic order of the lowercased names; records
    /// sharing a name keep their table order. An empty prefix returns every
    /// record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use countrycodes_core::{CountrySearch, Registry};
    ///
    /// let hits = Registry::global().find_by_name("united states minor");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].alpha2, "UM");
    /// ```
    fn find_by_name(&self, prefix: &str) -> Vec<&CountryCode>;

    /// Records with a calling code starting with `prefix` (e.g. `"+1"`,
    /// `"49"`). A leading `+` is ignored on both sides.
    fn find_by_dialing_code(&self, prefix: &str) -> Vec<&CountryCode>;

    /// Records with the given assignment status, in table order.
    fn by_assignment(&self, assignment: Assignment) -> Vec<&CountryCode>;
}
