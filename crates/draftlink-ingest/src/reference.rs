//! School alias and team lookup tables.

use std::path::Path;

use draftlink_map::{AliasTable, TeamDirectory};
use tracing::{info, info_span, warn};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::Result;
use crate::{LoadWarning, Loaded};

pub const ALIAS_OLD: &str = "Old name";
pub const ALIAS_NEW: &str = "New name";
pub const TEAM_ACRONYM: &str = "Acronym";
pub const TEAM_FULL_NAME: &str = "Full Name";
pub const MAPPING_OLD: &str = "team_old";
pub const MAPPING_NEW: &str = "team_new";

/// Loads school renames from a CSV with `Old name` and `New name` columns.
///
/// Rows with an empty old name are skipped: an empty key would turn every
/// missing school into the mapped name.
pub fn load_alias_table(path: &Path) -> Result<Loaded<AliasTable>> {
    let span = info_span!("load_aliases", path = %path.display());
    let _guard = span.enter();
    let table = read_csv_table(path)?;
    let loaded = alias_table_from_csv(&table, path)?;
    info!(aliases = loaded.data.len(), "loaded school aliases");
    Ok(loaded)
}

pub fn alias_table_from_csv(table: &CsvTable, path: &Path) -> Result<Loaded<AliasTable>> {
    let old_idx = table.require_column(path, ALIAS_OLD)?;
    let new_idx = table.require_column(path, ALIAS_NEW)?;
    let mut aliases = AliasTable::new();
    let mut warnings = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        if row[old_idx].is_empty() {
            warnings.push(LoadWarning {
                path: path.to_path_buf(),
                row: idx + 1,
                message: format!("empty '{ALIAS_OLD}'"),
            });
            continue;
        }
        aliases.insert(&row[old_idx], &row[new_idx]);
    }
    if !warnings.is_empty() {
        warn!(path = %path.display(), count = warnings.len(), "skipped alias rows");
    }
    Ok(Loaded::new(aliases, warnings))
}

/// Loads the teams table and, when given, the old-to-new team mapping.
pub fn load_team_directory(
    teams_path: &Path,
    mapping_path: Option<&Path>,
) -> Result<Loaded<TeamDirectory>> {
    let span = info_span!("load_teams", path = %teams_path.display());
    let _guard = span.enter();
    let teams = read_csv_table(teams_path)?;
    let mapping = mapping_path
        .map(|path| read_csv_table(path).map(|table| (table, path)))
        .transpose()?;
    let loaded = team_directory_from_csv(
        &teams,
        teams_path,
        mapping.as_ref().map(|(table, path)| (table, *path)),
    )?;
    info!(
        teams = loaded.data.team_count(),
        renames = loaded.data.rename_count(),
        "loaded team directory"
    );
    Ok(loaded)
}

pub fn team_directory_from_csv(
    teams: &CsvTable,
    teams_path: &Path,
    mapping: Option<(&CsvTable, &Path)>,
) -> Result<Loaded<TeamDirectory>> {
    let acronym_idx = teams.require_column(teams_path, TEAM_ACRONYM)?;
    let full_idx = teams.require_column(teams_path, TEAM_FULL_NAME)?;
    let mut directory = TeamDirectory::new();
    let mut warnings = Vec::new();
    for (idx, row) in teams.rows.iter().enumerate() {
        if row[full_idx].is_empty() {
            warnings.push(LoadWarning {
                path: teams_path.to_path_buf(),
                row: idx + 1,
                message: format!("empty '{TEAM_FULL_NAME}'"),
            });
            continue;
        }
        directory.add_team(&row[acronym_idx], &row[full_idx]);
    }

    if let Some((table, path)) = mapping {
        let old_idx = table.require_column(path, MAPPING_OLD)?;
        let new_idx = table.require_column(path, MAPPING_NEW)?;
        for row in &table.rows {
            directory.add_rename(&row[old_idx], &row[new_idx]);
        }
    }
    Ok(Loaded::new(directory, warnings))
}
