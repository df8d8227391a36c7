use std::path::PathBuf;
use std::time::Duration;

use draftlink_core::{BuildOptions, BuildReport};
use draftlink_ingest::LoadWarning;
use draftlink_map::{MatchOptions, MatchRule};
use draftlink_model::DraftRecord;

/// Inputs and settings for one master-table build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub stats: PathBuf,
    pub drafts: PathBuf,
    pub aliases: Option<PathBuf>,
    pub teams: Option<PathBuf>,
    pub team_mapping: Option<PathBuf>,
    pub output: PathBuf,
    pub unmatched: Option<PathBuf>,
    pub options: BuildOptions,
}

#[derive(Debug)]
pub struct BuildSummary {
    pub output: PathBuf,
    /// Review file path and the number of rows written to it.
    pub unmatched: Option<(PathBuf, usize)>,
    pub report: BuildReport,
    pub draft_records: usize,
    pub draft_years: usize,
    pub aliases: usize,
    pub teams: Option<usize>,
    pub warnings: Vec<LoadWarning>,
    pub elapsed: Duration,
}

/// A single ad-hoc lookup against the draft pool.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub name: String,
    pub school: String,
    pub year: Option<i32>,
    pub drafts: PathBuf,
    pub aliases: Option<PathBuf>,
    pub options: MatchOptions,
}

#[derive(Debug)]
pub struct MatchSummary {
    /// Normalized player name that was queried.
    pub name: String,
    /// Normalized, alias-resolved school that was queried.
    pub school: String,
    pub year: Option<i32>,
    pub record: Option<DraftRecord>,
    pub rule: Option<MatchRule>,
    pub candidates: usize,
    pub candidates_scanned: usize,
    pub best_name_score: f64,
    pub warnings: Vec<LoadWarning>,
}

impl MatchSummary {
    pub fn is_match(&self) -> bool {
        self.record.is_some()
    }
}
