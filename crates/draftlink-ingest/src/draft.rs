//! Draft history loading from JSON (array of objects) or CSV.

use std::fs;
use std::path::Path;

use draftlink_model::{DraftPool, DraftRecord};
use serde_json::Value;
use tracing::{debug, info, info_span, warn};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::{IngestError, Result};
use crate::values::{parse_int, value_to_text};
use crate::{LoadWarning, Loaded};

pub const PLAYER_NAME: &str = "Player Name";
pub const DRAFTED_FROM: &str = "Drafted From";
pub const YEAR: &str = "Year";
pub const ROUND: &str = "Round";
pub const PICK: &str = "Pick";
pub const DRAFTED_BY: &str = "Drafted By";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFormat {
    Json,
    Csv,
}

impl DraftFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

/// One draft row before validation; every field is optional text.
#[derive(Debug)]
struct RawDraftRow {
    player_name: Option<String>,
    drafted_from: Option<String>,
    year: Option<String>,
    round: Option<String>,
    pick: Option<String>,
    drafted_by: Option<String>,
}

impl RawDraftRow {
    /// Year, round and pick must be whole numbers; text fields default to
    /// empty.
    fn into_record(self) -> std::result::Result<DraftRecord, String> {
        Ok(DraftRecord {
            year: required_int(self.year.as_deref(), YEAR)?,
            round: required_int(self.round.as_deref(), ROUND)?,
            pick: required_int(self.pick.as_deref(), PICK)?,
            player_name: self.player_name.unwrap_or_default(),
            drafted_from: self.drafted_from.unwrap_or_default(),
            drafted_by: self.drafted_by.unwrap_or_default(),
        })
    }
}

fn required_int(value: Option<&str>, field: &str) -> std::result::Result<i32, String> {
    match parse_int(value.unwrap_or_default()) {
        Ok(Some(parsed)) => Ok(parsed),
        Ok(None) => Err(format!("missing {field}")),
        Err(message) => Err(format!("{field} {message}")),
    }
}

/// Loads the draft pool, choosing the parser from the file extension.
pub fn load_draft_pool(path: &Path) -> Result<Loaded<DraftPool>> {
    let span = info_span!("load_drafts", path = %path.display());
    let _guard = span.enter();
    let records = match DraftFormat::from_path(path) {
        Some(DraftFormat::Json) => {
            let text = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
            let value: Value = serde_json::from_str(&text).map_err(|source| IngestError::Json {
                path: path.to_path_buf(),
                source,
            })?;
            parse_draft_json(&value, path)?
        }
        Some(DraftFormat::Csv) => parse_draft_csv(&read_csv_table(path)?, path)?,
        None => {
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    let pool = records.map(DraftPool::new);
    info!(
        records = pool.data.len(),
        years = pool.data.years().count(),
        skipped = pool.warnings.len(),
        "loaded draft history"
    );
    Ok(pool)
}

pub fn parse_draft_json(value: &Value, path: &Path) -> Result<Loaded<Vec<DraftRecord>>> {
    let Value::Array(items) = value else {
        return Err(IngestError::NotAnArray {
            path: path.to_path_buf(),
        });
    };
    let rows = items.iter().map(|item| match item {
        Value::Object(object) => Ok(RawDraftRow {
            player_name: value_to_text(object.get(PLAYER_NAME)),
            drafted_from: value_to_text(object.get(DRAFTED_FROM)),
            year: value_to_text(object.get(YEAR)),
            round: value_to_text(object.get(ROUND)),
            pick: value_to_text(object.get(PICK)),
            drafted_by: value_to_text(object.get(DRAFTED_BY)),
        }),
        _ => Err("entry is not an object".to_string()),
    });
    Ok(collect_records(rows, path))
}

pub fn parse_draft_csv(table: &CsvTable, path: &Path) -> Result<Loaded<Vec<DraftRecord>>> {
    let year_idx = table.require_column(path, YEAR)?;
    let name_idx = table.require_column(path, PLAYER_NAME)?;
    let school_idx = table.require_column(path, DRAFTED_FROM)?;
    let round_idx = table.column_index(ROUND);
    let pick_idx = table.column_index(PICK);
    let by_idx = table.column_index(DRAFTED_BY);

    let rows = table.rows.iter().map(|row| {
        Ok(RawDraftRow {
            player_name: cell(row, Some(name_idx)),
            drafted_from: cell(row, Some(school_idx)),
            year: cell(row, Some(year_idx)),
            round: cell(row, round_idx),
            pick: cell(row, pick_idx),
            drafted_by: cell(row, by_idx),
        })
    });
    Ok(collect_records(rows, path))
}

fn cell(row: &[String], idx: Option<usize>) -> Option<String> {
    idx.map(|i| row[i].clone()).filter(|value| !value.is_empty())
}

fn collect_records<I>(rows: I, path: &Path) -> Loaded<Vec<DraftRecord>>
where
    I: Iterator<Item = std::result::Result<RawDraftRow, String>>,
{
    let mut records = Vec::new();
    let mut warnings = Vec::new();
    for (idx, row) in rows.enumerate() {
        match row.and_then(RawDraftRow::into_record) {
            Ok(record) => records.push(record),
            Err(message) => {
                debug!(row = idx + 1, %message, "skipping draft row");
                warnings.push(LoadWarning {
                    path: path.to_path_buf(),
                    row: idx + 1,
                    message,
                });
            }
        }
    }
    if !warnings.is_empty() {
        warn!(
            path = %path.display(),
            count = warnings.len(),
            "skipped malformed draft rows"
        );
    }
    Loaded::new(records, warnings)
}
