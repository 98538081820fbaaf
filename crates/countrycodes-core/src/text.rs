// crates/countrycodes-core/src/text.rs

/// Key under which a display name is stored in the prefix index.
///
/// Plain Unicode lowercasing, no transliteration: `"Côte d'Ivoire"` becomes
/// `"côte d'ivoire"`, and only `"côte"` (not `"cote"`) finds it.
pub fn name_key(s: &str) -> String {
    s.to_lowercase()
}

/// Calling code without surrounding whitespace and leading `+`.
pub fn dial_key(s: &str) -> &str {
    s.trim().trim_start_matches('+')
}
