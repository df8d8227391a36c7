//! Table loading for the draft linkage pipeline.
//!
//! Every loader separates two kinds of problems: a file that cannot be read
//! or lacks a required column is an [`IngestError`], while an individual
//! row with an unparseable value becomes a [`LoadWarning`] and loading
//! continues.

pub mod csv_table;
pub mod draft;
pub mod error;
pub mod reference;
pub mod stats;
pub mod values;

pub use csv_table::{CsvTable, read_csv_table, read_csv_table_from_reader};
pub use draft::{DraftFormat, load_draft_pool, parse_draft_csv, parse_draft_json};
pub use error::{IngestError, Result};
pub use reference::{load_alias_table, load_team_directory};
pub use stats::{load_stat_table, stat_table_from_csv};
pub use values::{parse_int, value_to_text};

use std::fmt;
use std::path::PathBuf;

/// A row that was loaded with a missing or unusable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub path: PathBuf,
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub message: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} row {}: {}", self.path.display(), self.row, self.message)
    }
}

/// Loaded data plus the row-level warnings raised while loading it.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub data: T,
    pub warnings: Vec<LoadWarning>,
}

impl<T> Loaded<T> {
    pub fn new(data: T, warnings: Vec<LoadWarning>) -> Self {
        Self { data, warnings }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        Loaded {
            data: f(self.data),
            warnings: self.warnings,
        }
    }
}
