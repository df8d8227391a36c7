use draftlink_map::MatchRule;
use serde::{Deserialize, Serialize};

use crate::builder::MasterRow;

/// Match counts for a built master table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub total: usize,
    pub matched: usize,
    /// Rows skipped because they had no usable year.
    pub missing_year: usize,
    pub fuzzy_name_matches: usize,
    pub exact_name_matches: usize,
    /// 0-based indices of unmatched rows, in input order.
    pub unmatched_rows: Vec<usize>,
}

impl BuildReport {
    pub fn from_rows(rows: &[MasterRow]) -> Self {
        let mut report = Self {
            total: rows.len(),
            ..Self::default()
        };
        for (idx, row) in rows.iter().enumerate() {
            if row.year_missing {
                report.missing_year += 1;
            }
            match row.rule {
                Some(MatchRule::FuzzyNameExactSchool) => report.fuzzy_name_matches += 1,
                Some(MatchRule::ExactNameFuzzySchool) => report.exact_name_matches += 1,
                None => {}
            }
            if row.draft.drafted {
                report.matched += 1;
            } else {
                report.unmatched_rows.push(idx);
            }
        }
        report
    }

    pub fn unmatched(&self) -> usize {
        self.total - self.matched
    }

    /// Matched share of all rows, 0.0 for an empty table.
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }
}
