//! Canonical comparison form for player and school names.

use std::sync::LazyLock;

use regex::Regex;

/// Whole-word `univ` or `univ.`; leaves `university` and `universidad` alone.
static UNIV_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\buniv(?:\.|\b)").expect("univ pattern compiles"));

/// Normalizes an optional value; missing input becomes the empty string.
pub fn normalize(value: Option<&str>) -> String {
    value.map(normalize_str).unwrap_or_default()
}

/// Normalizes free text for comparison.
///
/// Lowercases, spells out `&` as `and`, expands the abbreviation `univ`,
/// drops `college of`, and collapses whitespace. The rules are re-applied
/// until the text stops changing, so the result is a fixed point:
/// `normalize_str(&normalize_str(s)) == normalize_str(s)`.
pub fn normalize_str(raw: &str) -> String {
    let mut current = apply_rules(raw);
    loop {
        let next = apply_rules(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn apply_rules(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('&', "and");
    let expanded = UNIV_WORD.replace_all(&lowered, "university");
    let stripped = expanded.replace("college of", "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
