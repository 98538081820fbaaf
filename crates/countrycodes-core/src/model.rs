// crates/countrycodes-core/src/model.rs
use crate::error::CountryCodeError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Assignment status of an ISO-3166-1 alpha-2 code element.
///
/// See <http://en.wikipedia.org/wiki/ISO_3166-1_alpha-2> for the definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Assignment {
    /// Assigned to a country, territory, or area of geographical interest.
    OfficiallyAssigned,
    /// Free for assignment at the disposal of users.
    UserAssigned,
    /// Reserved on request for restricted use.
    ExceptionallyReserved,
    /// Deleted from ISO 3166-1 but reserved transitionally.
    TransitionallyReserved,
    /// Used in coding systems associated with ISO 3166-1.
    IndeterminatelyReserved,
    /// Not used in deference to international property organization names.
    NotUsed,
}

impl Assignment {
    pub const ALL: [Assignment; 6] = [
        Assignment::OfficiallyAssigned,
        Assignment::UserAssigned,
        Assignment::ExceptionallyReserved,
        Assignment::TransitionallyReserved,
        Assignment::IndeterminatelyReserved,
        Assignment::NotUsed,
    ];

    /// Stable identifier, e.g. `OFFICIALLY_ASSIGNED`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Assignment::OfficiallyAssigned => "OFFICIALLY_ASSIGNED",
            Assignment::UserAssigned => "USER_ASSIGNED",
            Assignment::ExceptionallyReserved => "EXCEPTIONALLY_RESERVED",
            Assignment::TransitionallyReserved => "TRANSITIONALLY_RESERVED",
            Assignment::IndeterminatelyReserved => "INDETERMINATELY_RESERVED",
            Assignment::NotUsed => "NOT_USED",
        }
    }

    /// Human readable label, e.g. `Officially assigned`.
    pub const fn label(self) -> &'static str {
        match self {
            Assignment::OfficiallyAssigned => "Officially assigned",
            Assignment::UserAssigned => "User assigned",
            Assignment::ExceptionallyReserved => "Exceptionally reserved",
            Assignment::TransitionallyReserved => "Transitionally reserved",
            Assignment::IndeterminatelyReserved => "Indeterminately reserved",
            Assignment::NotUsed => "Not used",
        }
    }

    /// Rank used when two records compete for the same index key.
    /// Higher wins; `OfficiallyAssigned` ranks highest.
    pub const fn precedence(self) -> u8 {
        match self {
            Assignment::OfficiallyAssigned => 5,
            Assignment::UserAssigned => 4,
            Assignment::ExceptionallyReserved => 3,
            Assignment::TransitionallyReserved => 2,
            Assignment::IndeterminatelyReserved => 1,
            Assignment::NotUsed => 0,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Assignment {
    type Err = CountryCodeError;

    /// Accepts the identifier in any case, with `-`, `_` or spaces between
    /// the words (`officially-assigned`, `Not used`, `USER_ASSIGNED`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ident: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        Assignment::ALL
            .into_iter()
            .find(|a| a.as_str() == ident)
            .ok_or_else(|| CountryCodeError::UnknownAssignment(s.to_owned()))
    }
}

/// One ISO-3166-1 code element.
///
/// Records are compiled into the binary, so every string is `&'static str`
/// and the whole record is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode {
    /// English display name.
    pub name: &'static str,
    /// Two uppercase letters. Unique across the dataset.
    pub alpha2: &'static str,
    /// Three uppercase letters, four for ISO 3166-3 formerly used codes,
    /// or `""` when none was assigned.
    pub alpha3: &'static str,
    /// `0..=999`, or `-1` when none was assigned.
    pub numeric: i16,
    /// Free text, possibly several comma separated codes, possibly empty.
    pub dialing_code: &'static str,
    pub assignment: Assignment,
}

impl CountryCode {
    pub const fn new(
        name: &'static str,
        alpha2: &'static str,
        alpha3: &'static str,
        numeric: i16,
        dialing_code: &'static str,
        assignment: Assignment,
    ) -> Self {
        Self {
            name,
            alpha2,
            alpha3,
            numeric,
            dialing_code,
            assignment,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn alpha2(&self) -> &'static str {
        self.alpha2
    }

    pub fn alpha3(&self) -> Option<&'static str> {
        (!self.alpha3.is_empty()).then_some(self.alpha3)
    }

    pub fn numeric(&self) -> Option<u16> {
        u16::try_from(self.numeric).ok()
    }

    /// Numeric code as the usual zero-padded three digits, e.g. `"004"`.
    pub fn numeric_str(&self) -> Option<String> {
        self.numeric().map(|n| format!("{n:03}"))
    }

    pub fn dialing_code(&self) -> Option<&'static str> {
        (!self.dialing_code.is_empty()).then_some(self.dialing_code)
    }

    /// Individual calling codes, e.g. `["+1-787", "+1-939"]` for Puerto Rico.
    pub fn dialing_codes(&self) -> impl Iterator<Item = &'static str> {
        self.dialing_code
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn assignment(&self) -> Assignment {
        self.assignment
    }

    pub fn is_officially_assigned(&self) -> bool {
        self.assignment == Assignment::OfficiallyAssigned
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.alpha2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUERTO_RICO: CountryCode = CountryCode::new(
        "Puerto Rico",
        "PR",
        "PRI",
        630,
        "+1-787, +1-939",
        Assignment::OfficiallyAssigned,
    );

    const EUROPEAN_UNION: CountryCode = CountryCode::new(
        "European Union",
        "EU",
        "",
        -1,
        "+388",
        Assignment::ExceptionallyReserved,
    );

    #[test]
    fn assignment_parses_loose_spellings() {
        assert_eq!(
            "officially-assigned".parse::<Assignment>().unwrap(),
            Assignment::OfficiallyAssigned
        );
        assert_eq!("Not used".parse::<Assignment>().unwrap(), Assignment::NotUsed);
        assert_eq!(
            " TRANSITIONALLY_RESERVED ".parse::<Assignment>().unwrap(),
            Assignment::TransitionallyReserved
        );
    }

    #[test]
    fn assignment_rejects_unknown_status() {
        let err = "reserved".parse::<Assignment>().unwrap_err();
        assert!(matches!(err, CountryCodeError::UnknownAssignment(ref s) if s == "reserved"));
    }

    #[test]
    fn assignment_round_trips_through_identifier() {
        for a in Assignment::ALL {
            assert_eq!(a.as_str().parse::<Assignment>().unwrap(), a);
        }
    }

    #[test]
    fn precedence_prefers_official_assignment() {
        assert!(
            Assignment::OfficiallyAssigned.precedence()
                > Assignment::TransitionallyReserved.precedence()
        );
        assert!(Assignment::UserAssigned.precedence() > Assignment::NotUsed.precedence());
    }

    #[test]
    fn optional_fields_hide_sentinels() {
        assert_eq!(EUROPEAN_UNION.alpha3(), None);
        assert_eq!(EUROPEAN_UNION.numeric(), None);
        assert_eq!(EUROPEAN_UNION.numeric_str(), None);
        assert_eq!(PUERTO_RICO.alpha3(), Some("PRI"));
        assert_eq!(PUERTO_RICO.numeric_str().as_deref(), Some("630"));
    }

    #[test]
    fn dialing_codes_split_on_commas() {
        let codes: Vec<_> = PUERTO_RICO.dialing_codes().collect();
        assert_eq!(codes, ["+1-787", "+1-939"]);

        let none = CountryCode { dialing_code: "", ..EUROPEAN_UNION };
        assert_eq!(none.dialing_codes().count(), 0);
        assert_eq!(none.dialing_code(), None);
    }

    #[test]
    fn display_shows_name_and_alpha2() {
        assert_eq!(PUERTO_RICO.to_string(), "Puerto Rico (PR)");
        assert_eq!(Assignment::UserAssigned.to_string(), "User assigned");
    }

    #[test]
    fn serializes_assignment_as_identifier() {
        let json = serde_json::to_value(EUROPEAN_UNION).unwrap();
        assert_eq!(json["assignment"], "EXCEPTIONALLY_RESERVED");
        assert_eq!(json["alpha2"], "EU");
        assert_eq!(json["numeric"], -1);
    }
}
