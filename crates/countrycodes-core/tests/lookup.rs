use countrycodes_core::data::COUNTRY_CODES;
use countrycodes_core::prelude::*;
use std::collections::HashSet;

fn registry() -> &'static Registry {
    Registry::global()
}

#[test]
fn every_record_is_found_by_its_alpha2() {
    for record in registry().records() {
        assert_eq!(registry().get_by_alpha2(record.alpha2), Some(record));
    }
}

#[test]
fn alpha2_codes_are_unique_uppercase_pairs() {
    let mut seen = HashSet::new();
    for record in &COUNTRY_CODES {
        assert_eq!(record.alpha2.len(), 2, "{record}");
        assert!(record.alpha2.bytes().all(|b| b.is_ascii_uppercase()), "{record}");
        assert!(seen.insert(record.alpha2), "duplicate alpha-2 {}", record.alpha2);
    }
}

#[test]
fn every_alpha3_resolves_to_a_record_with_that_code() {
    for record in registry().records() {
        if let Some(alpha3) = record.alpha3() {
            let hit = registry().get_by_alpha3(alpha3).unwrap();
            assert_eq!(hit.alpha3, alpha3);
        }
    }
}

#[test]
fn numeric_codes_stay_in_range() {
    for record in registry().records() {
        assert!((-1..=999).contains(&record.numeric), "{record}");
    }
}

#[test]
fn unknown_codes_are_not_found() {
    assert!(registry().get_by_alpha2("ZZ").is_none());
    assert!(registry().get_by_alpha2("us").is_none());
    assert!(registry().get_by_alpha2(" US").is_none());
    assert!(registry().get_by_alpha3("ZZZ").is_none());
    assert!(registry().get_by_name("germany").is_none());
    assert!(registry().get_by_numeric(-1).is_none());
    assert!(registry().get_by_numeric(1000).is_none());
    assert!(registry().get_by_numeric(i32::MAX).is_none());
}

#[test]
fn exact_lookups_agree_on_germany() {
    let de = registry().get_by_alpha2("DE").unwrap();
    assert_eq!(registry().get_by_alpha3("DEU"), Some(de));
    assert_eq!(registry().get_by_name("Germany"), Some(de));
    assert_eq!(registry().get_by_numeric(276), Some(de));
    assert_eq!(de.dialing_code, "+49");
}

#[test]
fn empty_prefix_returns_every_record() {
    assert_eq!(registry().find_by_name("").len(), registry().len());
    assert_eq!(registry().len(), COUNTRY_CODES.len());
}

#[test]
fn united_states_minor_matches_only_um() {
    let um = registry().get_by_alpha2("UM").unwrap();
    for query in ["United States Minor", "united states minor", "UNITED STATES MINOR"] {
        let matches = registry().find_by_name(query);
        assert_eq!(matches, [um], "query {query:?}");
    }
}

#[test]
fn nonexistent_prefix_returns_nothing() {
    assert!(registry().find_by_name("zz-nonexistent-prefix").is_empty());
}

#[test]
fn prefix_results_are_sorted_by_lowercased_name() {
    let hits = registry().find_by_name("united");
    let names: Vec<String> = hits.iter().map(|c| c.name.to_lowercase()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(hits.iter().all(|c| c.name.starts_with("United")));
    // United Kingdom appears under GB and under the reserved UK code.
    assert_eq!(hits.iter().filter(|c| c.name == "United Kingdom").count(), 2);
}

#[test]
fn prefix_search_matches_linear_scan() {
    for query in ["", "s", "sa", "saint", "Re", "\u{00E5}", "c\u{00F4}te", "korea"] {
        let q = query.to_lowercase();
        let expected: HashSet<&str> = registry()
            .records()
            .iter()
            .filter(|c| c.name.to_lowercase().starts_with(&q))
            .map(|c| c.alpha2)
            .collect();
        let got: HashSet<&str> = registry()
            .find_by_name(query)
            .iter()
            .map(|c| c.alpha2)
            .collect();
        assert_eq!(got, expected, "query {query:?}");
    }
}

#[test]
fn non_ascii_names_are_searchable() {
    let hits = registry().find_by_name("\u{00C5}LAND");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].alpha2, "AX");
    // No transliteration: the plain ASCII spelling does not match.
    assert!(registry().find_by_name("cote d").is_empty());
}

#[test]
fn collisions_prefer_official_assignment() {
    assert_eq!(registry().get_by_alpha3("FIN").unwrap().alpha2, "FI");
    assert_eq!(registry().get_by_name("Finland").unwrap().alpha2, "FI");
    assert_eq!(registry().get_by_numeric(246).unwrap().alpha2, "FI");
    assert_eq!(registry().get_by_name("United Kingdom").unwrap().alpha2, "GB");
    assert_eq!(registry().get_by_numeric(104).unwrap().alpha2, "MM");
    // TP and ZR are both transitionally reserved; the later record wins.
    assert_eq!(registry().get_by_numeric(0).unwrap().alpha2, "ZR");

    let finland: Vec<&str> = registry()
        .find_by_name("finland")
        .iter()
        .map(|c| c.alpha2)
        .collect();
    assert_eq!(finland, ["FI", "SF"]);
}

#[test]
fn formerly_used_codes_resolve_through_alpha3() {
    let yu = registry().get_by_alpha3("YUCS").unwrap();
    assert_eq!(yu.alpha2, "YU");
    assert_eq!(yu.assignment, Assignment::TransitionallyReserved);
}

#[test]
fn lookups_are_idempotent() {
    assert_eq!(registry().get_by_alpha2("FR"), registry().get_by_alpha2("FR"));
    assert_eq!(registry().get_by_alpha3("FRA"), registry().get_by_alpha3("FRA"));
    assert_eq!(registry().get_by_name("France"), registry().get_by_name("France"));
    assert_eq!(registry().get_by_numeric(250), registry().get_by_numeric(250));
    assert_eq!(registry().find_by_name("fr"), registry().find_by_name("fr"));
}

#[test]
fn fresh_registry_matches_global() {
    let local = Registry::new();
    assert_eq!(local.records(), registry().records());
    assert_eq!(local.find_by_name("ne"), registry().find_by_name("ne"));
    assert_eq!(local.get_by_numeric(0), registry().get_by_numeric(0));
}

#[test]
fn free_functions_use_the_global_registry() {
    let um = countrycodes_core::get_by_alpha2("UM").unwrap();
    assert!(std::ptr::eq(um, registry().get_by_alpha2("UM").unwrap()));
    assert_eq!(countrycodes_core::get_by_alpha3("UMI"), Some(um));
    assert_eq!(
        countrycodes_core::get_by_name("United States Minor Outlying Islands"),
        Some(um)
    );
    assert_eq!(countrycodes_core::get_by_numeric(581), Some(um));
    assert_eq!(countrycodes_core::find_by_name("United States Minor"), [um]);
}

#[test]
fn get_by_code_dispatches_on_shape() {
    assert_eq!(registry().get_by_code("DE").unwrap().alpha2, "DE");
    assert_eq!(registry().get_by_code("DEU").unwrap().alpha2, "DE");
    assert_eq!(registry().get_by_code("276").unwrap().alpha2, "DE");
    assert_eq!(registry().get_by_code("004").unwrap().alpha2, "AF");
    assert_eq!(registry().get_by_code("BUMM").unwrap().alpha2, "BU");
    assert!(registry().get_by_code("D").is_none());
    assert!(registry().get_by_code("Germany").is_none());
}

#[test]
fn require_turns_a_miss_into_an_error() {
    assert_eq!(registry().require("CH").unwrap().name, "Switzerland");
    let err = registry().require("XYZ").unwrap_err();
    assert_eq!(err, CountryCodeError::NotFound("XYZ".into()));
    assert_eq!(err.to_string(), "No country found for: XYZ");
}

#[test]
fn dialing_code_search_ignores_plus() {
    let with_plus: Vec<&str> = registry()
        .find_by_dialing_code("+49")
        .iter()
        .map(|c| c.alpha2)
        .collect();
    let without: Vec<&str> = registry()
        .find_by_dialing_code("49")
        .iter()
        .map(|c| c.alpha2)
        .collect();
    assert_eq!(with_plus, without);
    assert!(with_plus.contains(&"DE"));
    assert!(registry().find_by_dialing_code("+").is_empty());

    // Secondary codes after a comma count too.
    let pr: Vec<&str> = registry()
        .find_by_dialing_code("+1-939")
        .iter()
        .map(|c| c.alpha2)
        .collect();
    assert_eq!(pr, ["PR"]);
}

#[test]
fn stats_add_up() {
    let stats = registry().stats();
    assert_eq!(stats.total, registry().len());
    let sum: usize = Assignment::ALL.into_iter().map(|a| stats.count(a)).sum();
    assert_eq!(sum, stats.total);
    assert_eq!(
        stats.count(Assignment::OfficiallyAssigned),
        registry().by_assignment(Assignment::OfficiallyAssigned).len()
    );
    assert_eq!(stats.officially_assigned, 249);
    assert_eq!(stats.user_assigned, 1);
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = ["DE", "FR", "UM", "JP"]
        .into_iter()
        .map(|code| {
            std::thread::spawn(move || {
                let hit = Registry::global().get_by_alpha2(code).unwrap();
                (hit.alpha2, Registry::global().find_by_name("").len())
            })
        })
        .collect();

    for handle in handles {
        let (alpha2, total) = handle.join().unwrap();
        assert_eq!(alpha2.len(), 2);
        assert_eq!(total, COUNTRY_CODES.len());
    }
}
