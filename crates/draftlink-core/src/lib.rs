//! Master-table construction: every statistics row enriched with the draft
//! outcome of its player season.

pub mod builder;
pub mod error;
pub mod output;
pub mod report;

pub use builder::{BuildOptions, MasterRow, MasterTable, MasterTableBuilder};
pub use error::{OutputError, Result};
pub use output::{
    DRAFT_COLUMNS, FULL_TEAM_NAME_COLUMN, write_master_csv, write_master_csv_file,
    write_unmatched_csv_file,
};
pub use report::BuildReport;
