//! Text and JSON output for the CLI.
use countrycodes_core::{Assignment, CountryCode, RegistryStats};

/// One line per record: `AD  AND   020  +376        Andorra`.
pub fn record_line(c: &CountryCode) -> String {
    format!(
        "{:<3} {:<5} {:<4} {:<12} {}",
        c.alpha2,
        c.alpha3,
        c.numeric_str().unwrap_or_else(|| "-".to_owned()),
        c.dialing_code,
        c.name
    )
}

/// Multi-line details for a single record.
pub fn record_details(c: &CountryCode) -> String {
    let numeric = c.numeric_str().unwrap_or_else(|| "-".to_owned());
    [
        format!("Country: {}", c.name),
        format!("Alpha-2: {}", c.alpha2),
        format!("Alpha-3: {}", c.alpha3().unwrap_or("-")),
        format!("Numeric: {numeric}"),
        format!("Dialing Code: {}", c.dialing_code().unwrap_or("-")),
        format!("Assignment: {}", c.assignment),
    ]
    .join("\n")
}

pub fn stats_text(stats: &RegistryStats) -> String {
    let mut out = format!("Registry statistics:\n  Total: {}", stats.total);
    for a in Assignment::ALL {
        out.push_str(&format!("\n  {}: {}", a.label(), stats.count(a)));
    }
    out
}

pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
