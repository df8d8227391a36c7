//! Year-scoped fuzzy matching of statistics rows against draft records.
//!
//! A candidate is accepted when either
//! - its name scores at least `name_threshold` and its alias-resolved
//!   school equals the query school exactly, or
//! - its name equals the query name exactly and its school scores at least
//!   `school_threshold`.
//!
//! Candidates are scanned in draft load order and the first accepted one
//! is returned. The best name score seen during a failed scan is reported
//! for diagnostics only.

use std::collections::BTreeMap;

use draftlink_model::{DraftPool, DraftRecord, MatchResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::alias::AliasTable;
use crate::normalize::normalize_str;
use crate::score::token_set_ratio;

/// Acceptance thresholds on the 0-100 similarity scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    pub name_threshold: f64,
    pub school_threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            name_threshold: 90.0,
            school_threshold: 90.0,
        }
    }
}

/// Which acceptance rule admitted a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRule {
    /// Fuzzy name, exact school.
    FuzzyNameExactSchool,
    /// Exact name, fuzzy school.
    ExactNameFuzzySchool,
}

/// A match decision plus the diagnostics gathered while reaching it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOutcome<'a> {
    pub result: MatchResult<'a>,
    pub rule: Option<MatchRule>,
    pub candidates_scanned: usize,
    /// Highest name score seen; for an accepted candidate this is its own
    /// name score only if nothing earlier scored higher.
    pub best_name_score: f64,
}

impl MatchOutcome<'_> {
    fn no_match(candidates_scanned: usize, best_name_score: f64) -> Self {
        Self {
            result: MatchResult::NoMatch,
            rule: None,
            candidates_scanned,
            best_name_score,
        }
    }
}

#[derive(Debug, Clone)]
struct Candidate<'a> {
    record: &'a DraftRecord,
    name: String,
    school: String,
}

/// Matcher over a loaded draft pool.
///
/// Candidate names and alias-resolved schools are normalized once at
/// construction; queries borrow the prepared pool and never mutate it, so a
/// matcher can be shared across threads.
#[derive(Debug, Clone)]
pub struct DraftMatcher<'a> {
    by_year: BTreeMap<i32, Vec<Candidate<'a>>>,
    aliases: &'a AliasTable,
    options: MatchOptions,
}

impl<'a> DraftMatcher<'a> {
    pub fn new(pool: &'a DraftPool, aliases: &'a AliasTable) -> Self {
        let mut by_year: BTreeMap<i32, Vec<Candidate<'a>>> = BTreeMap::new();
        for year in pool.years() {
            let candidates = pool
                .for_year(year)
                .map(|record| Candidate {
                    record,
                    name: normalize_str(&record.player_name),
                    school: aliases
                        .resolve(&normalize_str(&record.drafted_from))
                        .to_string(),
                })
                .collect();
            by_year.insert(year, candidates);
        }
        Self {
            by_year,
            aliases,
            options: MatchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Finds the draft record for a player season.
    ///
    /// `player_name` and `school_name` must already be normalized. A missing
    /// year, or a year without draft records, is never a match.
    pub fn find_match(
        &self,
        player_name: &str,
        school_name: &str,
        year: Option<i32>,
    ) -> MatchResult<'a> {
        self.find_match_detailed(player_name, school_name, year)
            .result
    }

    /// Same decision as [`find_match`](Self::find_match), with diagnostics.
    pub fn find_match_detailed(
        &self,
        player_name: &str,
        school_name: &str,
        year: Option<i32>,
    ) -> MatchOutcome<'a> {
        let Some(year) = year else {
            return MatchOutcome::no_match(0, 0.0);
        };
        let Some(candidates) = self.by_year.get(&year).filter(|c| !c.is_empty()) else {
            trace!(year, "no draft records for year");
            return MatchOutcome::no_match(0, 0.0);
        };

        let school = self.aliases.resolve(school_name);
        let mut best_name_score = 0.0_f64;

        for (index, candidate) in candidates.iter().enumerate() {
            let name_score = token_set_ratio(player_name, &candidate.name);
            let school_score = token_set_ratio(school, &candidate.school);
            best_name_score = best_name_score.max(name_score);

            let rule = if name_score >= self.options.name_threshold && school == candidate.school
            {
                Some(MatchRule::FuzzyNameExactSchool)
            } else if player_name == candidate.name
                && school_score >= self.options.school_threshold
            {
                Some(MatchRule::ExactNameFuzzySchool)
            } else {
                None
            };

            if let Some(rule) = rule {
                trace!(year, name_score, school_score, ?rule, "draft candidate accepted");
                return MatchOutcome {
                    result: MatchResult::Matched(candidate.record),
                    rule: Some(rule),
                    candidates_scanned: index + 1,
                    best_name_score,
                };
            }
        }

        debug!(
            year,
            candidates = candidates.len(),
            best_name_score,
            "no draft candidate accepted"
        );
        MatchOutcome::no_match(candidates.len(), best_name_score)
    }

    /// Number of draft records available for `year`.
    pub fn pool_size(&self, year: i32) -> usize {
        self.by_year.get(&year).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, school: &str, year: i32, round: i32, pick: i32) -> DraftRecord {
        DraftRecord {
            player_name: name.to_string(),
            drafted_from: school.to_string(),
            year,
            round,
            pick,
            drafted_by: "Team".to_string(),
        }
    }

    #[test]
    fn fuzzy_name_with_exact_school() {
        let pool = DraftPool::new(vec![draft("Jon Smith", "Ohio State Univ.", 2020, 3, 90)]);
        let aliases = AliasTable::new();
        let matcher = DraftMatcher::new(&pool, &aliases);

        let outcome = matcher.find_match_detailed("john smith", "ohio state university", Some(2020));
        let record = outcome.result.record().expect("matched");
        assert_eq!((record.round, record.pick), (3, 90));
        assert_eq!(outcome.rule, Some(MatchRule::FuzzyNameExactSchool));
        assert_eq!(outcome.candidates_scanned, 1);
    }

    #[test]
    fn exact_name_with_fuzzy_school() {
        let pool = DraftPool::new(vec![draft("john smith", "ohio state", 2020, 1, 5)]);
        let aliases = AliasTable::new();
        let matcher = DraftMatcher::new(&pool, &aliases);

        let outcome = matcher.find_match_detailed("john smith", "ohio state university", Some(2020));
        assert!(outcome.result.is_match());
        assert_eq!(outcome.rule, Some(MatchRule::ExactNameFuzzySchool));
    }

    #[test]
    fn fuzzy_name_and_fuzzy_school_is_rejected() {
        let pool = DraftPool::new(vec![draft("jon smith", "ohio state", 2020, 1, 5)]);
        let aliases = AliasTable::new();
        let matcher = DraftMatcher::new(&pool, &aliases);

        let outcome = matcher.find_match_detailed("john smith", "ohio state university", Some(2020));
        assert_eq!(outcome.result, MatchResult::NoMatch);
        assert_eq!(outcome.candidates_scanned, 1);
        assert!(outcome.best_name_score >= 90.0);
    }

    #[test]
    fn missing_year_is_no_match() {
        let pool = DraftPool::new(vec![draft("john smith", "ohio state", 2020, 1, 5)]);
        let aliases = AliasTable::new();
        let matcher = DraftMatcher::new(&pool, &aliases);
        assert_eq!(
            matcher.find_match("john smith", "ohio state", None),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn custom_thresholds_apply() {
        let pool = DraftPool::new(vec![draft("jon smith", "ohio state", 2020, 1, 5)]);
        let aliases = AliasTable::new();
        let strict = DraftMatcher::new(&pool, &aliases).with_options(MatchOptions {
            name_threshold: 99.0,
            school_threshold: 99.0,
        });
        assert_eq!(
            strict.find_match("john smith", "ohio state", Some(2020)),
            MatchResult::NoMatch
        );
        assert_eq!(strict.pool_size(2020), 1);
        assert_eq!(strict.pool_size(2021), 0);
    }
}
