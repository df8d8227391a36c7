use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace, warn};

use draftlink_core::{MasterTableBuilder, write_master_csv_file, write_unmatched_csv_file};
use draftlink_ingest::{
    LoadWarning, Loaded, load_alias_table, load_draft_pool, load_stat_table, load_team_directory,
};
use draftlink_map::{AliasTable, DraftMatcher, TeamDirectory, normalize_str};

use crate::logging::redact_value;
use crate::types::{BuildRequest, BuildSummary, MatchRequest, MatchSummary};

/// Rows between progress events during a build.
const PROGRESS_INTERVAL: usize = 1000;

pub fn run_build(request: &BuildRequest) -> Result<BuildSummary> {
    let span = info_span!("build", stats = %request.stats.display());
    let _guard = span.enter();
    let start = Instant::now();
    let mut warnings = Vec::new();

    let stats = load_stat_table(&request.stats)
        .with_context(|| format!("load statistics {}", request.stats.display()))?;
    let stats = keep(stats, &mut warnings);
    let pool = load_draft_pool(&request.drafts)
        .with_context(|| format!("load draft records {}", request.drafts.display()))?;
    let pool = keep(pool, &mut warnings);
    if pool.is_empty() {
        warn!(path = %request.drafts.display(), "draft table is empty; no row can match");
    }
    let aliases = load_aliases(request.aliases.as_deref(), &mut warnings)?;
    let teams = match &request.teams {
        Some(path) => {
            let loaded = load_team_directory(path, request.team_mapping.as_deref())
                .with_context(|| format!("load teams {}", path.display()))?;
            Some(keep(loaded, &mut warnings))
        }
        None => None,
    };

    let mut builder = MasterTableBuilder::new(&pool, &aliases).with_options(request.options);
    if let Some(teams) = &teams {
        builder = builder.with_teams(teams);
    }
    let total = stats.len();
    let processed = AtomicUsize::new(0);
    let table = builder.build_with_progress(&stats, || {
        let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
        if done % PROGRESS_INTERVAL == 0 {
            info!(done, total, "matching players");
        }
    });

    for (idx, (record, row)) in table.iter().enumerate() {
        if !row.draft.drafted {
            trace!(
                row = idx + 1,
                player = redact_value(record.name.as_deref().unwrap_or_default()),
                year = ?record.year,
                "player season not drafted"
            );
        }
    }

    write_master_csv_file(&table, &request.output)
        .with_context(|| format!("write master table {}", request.output.display()))?;
    let unmatched = match &request.unmatched {
        Some(path) => {
            let rows = write_unmatched_csv_file(&table, path)
                .with_context(|| format!("write unmatched rows {}", path.display()))?;
            Some((path.clone(), rows))
        }
        None => None,
    };

    Ok(BuildSummary {
        output: request.output.clone(),
        unmatched,
        report: table.report(),
        draft_records: pool.len(),
        draft_years: pool.years().count(),
        aliases: aliases.len(),
        teams: teams.as_ref().map(TeamDirectory::team_count),
        warnings,
        elapsed: start.elapsed(),
    })
}

pub fn run_match(request: &MatchRequest) -> Result<MatchSummary> {
    let span = info_span!("match", year = ?request.year);
    let _guard = span.enter();
    let mut warnings = Vec::new();

    let pool = load_draft_pool(&request.drafts)
        .with_context(|| format!("load draft records {}", request.drafts.display()))?;
    let pool = keep(pool, &mut warnings);
    let aliases = load_aliases(request.aliases.as_deref(), &mut warnings)?;
    let matcher = DraftMatcher::new(&pool, &aliases).with_options(request.options);

    let name = normalize_str(&request.name);
    let school = normalize_str(&request.school);
    let outcome = matcher.find_match_detailed(&name, &school, request.year);
    debug!(
        player = redact_value(&name),
        school = %school,
        matched = outcome.result.is_match(),
        scanned = outcome.candidates_scanned,
        best_name_score = outcome.best_name_score,
        "ran single match"
    );

    Ok(MatchSummary {
        school: aliases.resolve(&school).to_string(),
        name,
        year: request.year,
        record: outcome.result.record().cloned(),
        rule: outcome.rule,
        candidates: request.year.map_or(0, |year| matcher.pool_size(year)),
        candidates_scanned: outcome.candidates_scanned,
        best_name_score: outcome.best_name_score,
        warnings,
    })
}

fn load_aliases(path: Option<&Path>, warnings: &mut Vec<LoadWarning>) -> Result<AliasTable> {
    let Some(path) = path else {
        debug!("no alias table given; school names are compared as normalized");
        return Ok(AliasTable::new());
    };
    let loaded = load_alias_table(path)
        .with_context(|| format!("load school aliases {}", path.display()))?;
    Ok(keep(loaded, warnings))
}

/// Moves the row warnings of `loaded` into `warnings` and returns its data.
fn keep<T>(loaded: Loaded<T>, warnings: &mut Vec<LoadWarning>) -> T {
    warnings.extend(loaded.warnings);
    loaded.data
}
