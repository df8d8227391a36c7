//! Token-set similarity on a 0-100 scale.
//!
//! Built on the normalized Indel similarity from `rapidfuzz`. Tokens are
//! whitespace-delimited and compared as sorted sets, so word order and
//! repeated words do not affect the score.

use std::collections::BTreeSet;

use rapidfuzz::fuzz;

/// Normalized Indel similarity scaled to 0-100.
pub fn ratio(left: &str, right: &str) -> f64 {
    fuzz::ratio(left.chars(), right.chars()) * 100.0
}

/// Order-insensitive token overlap score between two strings.
///
/// Two strings without any tokens score 100; a string without tokens
/// against one with tokens scores 0. When one token set contains the
/// other the score is 100. Otherwise the shared tokens are compared
/// against each side's shared-plus-remaining tokens and the best of the
/// three pairwise ratios is returned.
pub fn token_set_ratio(left: &str, right: &str) -> f64 {
    let left_tokens: BTreeSet<&str> = left.split_whitespace().collect();
    let right_tokens: BTreeSet<&str> = right.split_whitespace().collect();

    match (left_tokens.is_empty(), right_tokens.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let shared: Vec<&str> = left_tokens.intersection(&right_tokens).copied().collect();
    let left_only: Vec<&str> = left_tokens.difference(&right_tokens).copied().collect();
    let right_only: Vec<&str> = right_tokens.difference(&left_tokens).copied().collect();

    if !shared.is_empty() && (left_only.is_empty() || right_only.is_empty()) {
        return 100.0;
    }

    let shared = shared.join(" ");
    let left_combined = join_tokens(&shared, &left_only.join(" "));
    let right_combined = join_tokens(&shared, &right_only.join(" "));

    let mut best = ratio(&left_combined, &right_combined);
    if !shared.is_empty() {
        best = best
            .max(ratio(&shared, &left_combined))
            .max(ratio(&shared, &right_combined));
    }
    best
}

fn join_tokens(prefix: &str, rest: &str) -> String {
    match (prefix.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix} {rest}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(token_set_ratio("ohio state university", "ohio state university"), 100.0);
    }

    #[test]
    fn word_order_is_ignored() {
        assert_eq!(token_set_ratio("smith john", "john smith"), 100.0);
    }

    #[test]
    fn subset_scores_100() {
        assert_eq!(token_set_ratio("texas", "university texas"), 100.0);
    }

    #[test]
    fn empty_conventions() {
        assert_eq!(token_set_ratio("", ""), 100.0);
        assert_eq!(token_set_ratio("   ", ""), 100.0);
        assert_eq!(token_set_ratio("", "john smith"), 0.0);
        assert_eq!(token_set_ratio("john smith", ""), 0.0);
    }

    #[test]
    fn one_letter_typo_clears_ninety() {
        let score = token_set_ratio("john smith", "jon smith");
        assert!(score >= 90.0, "got {score}");
        assert!(score < 100.0, "got {score}");
    }

    #[test]
    fn different_names_score_low() {
        let score = token_set_ratio("john smith", "derek lowe");
        assert!(score < 50.0, "got {score}");
    }

    #[test]
    fn renamed_school_is_below_threshold() {
        let score = token_set_ratio("state college", "state university");
        assert!(score < 90.0, "got {score}");
    }

    #[test]
    fn ratio_scale() {
        assert_eq!(ratio("abc", "abc"), 100.0);
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }
}
