//! CSV rendering of the master table.
//!
//! Output columns are the statistics headers as loaded, then
//! `Full Team Name` when a team directory was used, then the draft columns.
//! A derived column whose header is already among the statistics headers
//! replaces that column in place, so rebuilding a previous output does not
//! duplicate columns.
//! Missing draft values are written as empty cells and the drafted flag as
//! `True`/`False`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::builder::MasterTable;
use crate::error::{OutputError, Result};

pub const FULL_TEAM_NAME_COLUMN: &str = "Full Team Name";
pub const DRAFT_COLUMNS: [&str; 5] = ["Round", "Pick", "Drafted By", "Drafted From", "Drafted?"];

pub fn write_master_csv<W: Write>(table: &MasterTable<'_>, writer: W) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    let mut derived: Vec<&str> = Vec::with_capacity(DRAFT_COLUMNS.len() + 1);
    if table.with_team_names {
        derived.push(FULL_TEAM_NAME_COLUMN);
    }
    derived.extend(DRAFT_COLUMNS);
    let layout = ColumnLayout::new(&table.stats.headers, &derived);

    let mut header = table.stats.headers.clone();
    layout.place(&mut header, derived.iter().map(|column| (*column).to_string()));
    writer.write_record(&header)?;

    for (record, row) in table.iter() {
        let draft = &row.draft;
        let mut values = Vec::with_capacity(derived.len());
        if table.with_team_names {
            values.push(row.full_team_name.clone().unwrap_or_default());
        }
        values.push(draft.round.map(|v| v.to_string()).unwrap_or_default());
        values.push(draft.pick.map(|v| v.to_string()).unwrap_or_default());
        values.push(draft.drafted_by.clone().unwrap_or_default());
        values.push(draft.drafted_from.clone().unwrap_or_default());
        values.push(if draft.drafted { "True" } else { "False" }.to_string());

        let mut out = record.cells.clone();
        layout.place(&mut out, values);
        writer.write_record(&out)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Where each derived column goes: over an input column with the same
/// header, or appended after the input columns.
struct ColumnLayout {
    targets: Vec<Option<usize>>,
}

impl ColumnLayout {
    fn new(headers: &[String], derived: &[&str]) -> Self {
        let targets = derived
            .iter()
            .map(|column| headers.iter().position(|header| header.as_str() == *column))
            .collect();
        Self { targets }
    }

    fn place(&self, out: &mut Vec<String>, values: impl IntoIterator<Item = String>) {
        for (target, value) in self.targets.iter().zip(values) {
            match target {
                Some(idx) => out[*idx] = value,
                None => out.push(value),
            }
        }
    }
}

pub fn write_master_csv_file(table: &MasterTable<'_>, path: &Path) -> Result<()> {
    let file = create(path)?;
    write_master_csv(table, file)?;
    info!(path = %path.display(), rows = table.len(), "wrote master table");
    Ok(())
}

/// Writes only the unmatched rows, with their original columns, for review.
pub fn write_unmatched_csv_file(table: &MasterTable<'_>, path: &Path) -> Result<usize> {
    let file = create(path)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(&table.stats.headers)?;
    let mut written = 0usize;
    for (record, row) in table.iter() {
        if row.draft.drafted {
            continue;
        }
        writer.write_record(&record.cells)?;
        written += 1;
    }
    writer.flush().map_err(csv::Error::from)?;
    info!(path = %path.display(), rows = written, "wrote unmatched rows");
    Ok(written)
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
