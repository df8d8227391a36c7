//! Drives the draft matcher over every statistics row.
//!
//! The builder never drops or reorders rows: the output has exactly one
//! [`MasterRow`] per input record, in input order, whether or not the row
//! matched. Parallel builds split the rows into contiguous chunks and
//! concatenate the chunk results in order, so they produce the same table
//! as a sequential build.

use std::num::NonZeroUsize;
use std::thread;

use draftlink_map::{
    AliasTable, DraftMatcher, MatchOptions, MatchRule, TeamDirectory, normalize,
};
use draftlink_model::{DraftFields, DraftPool, StatRecord, StatTable};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, trace};

use crate::report::BuildReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    pub match_options: MatchOptions,
    /// Worker threads; `None` builds on the calling thread.
    pub parallel: Option<NonZeroUsize>,
}

/// Derived columns for one statistics row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterRow {
    /// Normalized full school name from the team directory, when known.
    pub full_team_name: Option<String>,
    pub draft: DraftFields,
    pub rule: Option<MatchRule>,
    /// The row had no usable year and was not compared.
    pub year_missing: bool,
}

/// Statistics rows paired with their derived columns.
#[derive(Debug, Clone)]
pub struct MasterTable<'s> {
    pub stats: &'s StatTable,
    pub rows: Vec<MasterRow>,
    /// Whether a team directory was used, and so whether the
    /// `Full Team Name` column is part of the output.
    pub with_team_names: bool,
}

impl<'s> MasterTable<'s> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Input records with their derived columns, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&'s StatRecord, &MasterRow)> + '_ {
        self.stats.records.iter().zip(&self.rows)
    }

    pub fn report(&self) -> BuildReport {
        BuildReport::from_rows(&self.rows)
    }
}

pub struct MasterTableBuilder<'a> {
    matcher: DraftMatcher<'a>,
    teams: Option<&'a TeamDirectory>,
    options: BuildOptions,
}

impl<'a> MasterTableBuilder<'a> {
    pub fn new(pool: &'a DraftPool, aliases: &'a AliasTable) -> Self {
        Self {
            matcher: DraftMatcher::new(pool, aliases),
            teams: None,
            options: BuildOptions::default(),
        }
    }

    #[must_use]
    pub fn with_teams(mut self, teams: &'a TeamDirectory) -> Self {
        self.teams = Some(teams);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.matcher = self.matcher.with_options(options.match_options);
        self.options = options;
        self
    }

    pub fn matcher(&self) -> &DraftMatcher<'a> {
        &self.matcher
    }

    /// Matches one statistics row.
    ///
    /// The query school is the directory's full name for the row's team when
    /// one resolves, otherwise the normalized team value itself.
    pub fn match_record(&self, record: &StatRecord) -> MasterRow {
        let full_team_name = self
            .teams
            .zip(record.team.as_deref())
            .and_then(|(teams, team)| teams.full_name(team))
            .map(str::to_string);

        let Some(year) = record.year else {
            return MasterRow {
                full_team_name,
                draft: DraftFields::undrafted(),
                rule: None,
                year_missing: true,
            };
        };

        let name = normalize(record.name.as_deref());
        let school = full_team_name
            .clone()
            .unwrap_or_else(|| normalize(record.team.as_deref()));
        let outcome = self.matcher.find_match_detailed(&name, &school, Some(year));
        trace!(
            year,
            matched = outcome.result.is_match(),
            scanned = outcome.candidates_scanned,
            best_name_score = outcome.best_name_score,
            "matched statistics row"
        );
        MasterRow {
            full_team_name,
            draft: DraftFields::from_result(&outcome.result),
            rule: outcome.rule,
            year_missing: false,
        }
    }

    pub fn build<'s>(&self, stats: &'s StatTable) -> MasterTable<'s> {
        self.build_with_progress(stats, || {})
    }

    /// Builds the master table, calling `on_row` once per processed row.
    pub fn build_with_progress<'s, F>(&self, stats: &'s StatTable, on_row: F) -> MasterTable<'s>
    where
        F: Fn() + Sync,
    {
        let span = info_span!("build_master_table", rows = stats.len());
        let _guard = span.enter();

        let rows = match self.options.parallel {
            Some(threads) if threads.get() > 1 && stats.len() > 1 => {
                self.build_parallel(&stats.records, threads.get(), &on_row)
            }
            _ => stats
                .records
                .iter()
                .map(|record| {
                    let row = self.match_record(record);
                    on_row();
                    row
                })
                .collect(),
        };

        let table = MasterTable {
            stats,
            rows,
            with_team_names: self.teams.is_some(),
        };
        let report = table.report();
        info!(
            rows = report.total,
            matched = report.matched,
            unmatched = report.unmatched(),
            missing_year = report.missing_year,
            "built master table"
        );
        table
    }

    fn build_parallel<F>(&self, records: &[StatRecord], threads: usize, on_row: &F) -> Vec<MasterRow>
    where
        F: Fn() + Sync,
    {
        let chunk_size = records.len().div_ceil(threads);
        thread::scope(|scope| {
            let handles: Vec<_> = records
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|record| {
                                let row = self.match_record(record);
                                on_row();
                                row
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        })
    }
}
