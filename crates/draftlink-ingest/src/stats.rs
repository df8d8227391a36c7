//! Player-season statistics loading.

use std::path::Path;

use draftlink_model::{StatRecord, StatTable};
use tracing::{debug, info, info_span, warn};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::Result;
use crate::values::parse_int;
use crate::{LoadWarning, Loaded};

pub const NAME_COLUMN: &str = "name";
pub const TEAM_COLUMN: &str = "team";
pub const YEAR_COLUMN: &str = "year";

/// Loads a statistics CSV with at least `name` and `team` columns.
///
/// A missing `year` column is tolerated: every row then has no year and
/// will never match. Rows with an unparseable year are kept with
/// `year = None` and reported as warnings.
pub fn load_stat_table(path: &Path) -> Result<Loaded<StatTable>> {
    let span = info_span!("load_stats", path = %path.display());
    let _guard = span.enter();
    let table = read_csv_table(path)?;
    let loaded = stat_table_from_csv(table, path)?;
    info!(
        rows = loaded.data.len(),
        warnings = loaded.warnings.len(),
        "loaded statistics"
    );
    Ok(loaded)
}

pub fn stat_table_from_csv(table: CsvTable, path: &Path) -> Result<Loaded<StatTable>> {
    let name_idx = table.require_column(path, NAME_COLUMN)?;
    let team_idx = table.require_column(path, TEAM_COLUMN)?;
    let year_idx = table.column_index(YEAR_COLUMN);
    if year_idx.is_none() {
        warn!(path = %path.display(), "statistics have no year column; no row can match");
    }

    let mut warnings = Vec::new();
    let mut stats = StatTable::new(table.headers);
    for (idx, cells) in table.rows.into_iter().enumerate() {
        let row = idx + 1;
        let year = match year_idx.map(|i| parse_int(&cells[i])) {
            Some(Ok(year)) => year,
            Some(Err(message)) => {
                debug!(row, %message, "unparseable statistics year");
                warnings.push(LoadWarning {
                    path: path.to_path_buf(),
                    row,
                    message: format!("year {message}"),
                });
                None
            }
            None => None,
        };
        stats.push(StatRecord {
            name: non_empty(&cells[name_idx]),
            team: non_empty(&cells[team_idx]),
            year,
            cells,
        });
    }
    if !warnings.is_empty() {
        warn!(
            path = %path.display(),
            count = warnings.len(),
            "statistics rows with unparseable year will not be matched"
        );
    }
    Ok(Loaded::new(stats, warnings))
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
