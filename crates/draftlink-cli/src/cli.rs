//! CLI argument definitions for draftlink.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use draftlink_cli::types::{BuildRequest, MatchRequest};
use draftlink_core::BuildOptions;
use draftlink_map::MatchOptions;

#[derive(Parser)]
#[command(
    name = "draftlink",
    version,
    about = "Link college baseball statistics to professional draft records",
    long_about = "Link college baseball player-season statistics to professional draft records.\n\n\
                  Player and school names are normalized, school renames are resolved through\n\
                  an alias table, and candidates from the same draft year are fuzzy matched."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow player names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the master table: every statistics row with its draft outcome.
    Build(BuildArgs),

    /// Look up one player season in the draft records.
    Match(MatchArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Player-season statistics CSV (needs name, team and year columns).
    #[arg(long, value_name = "CSV")]
    pub stats: PathBuf,

    /// Draft records as a JSON array or CSV.
    #[arg(long, value_name = "JSON|CSV")]
    pub drafts: PathBuf,

    /// School alias table with "Old name" and "New name" columns.
    #[arg(long, value_name = "CSV")]
    pub aliases: Option<PathBuf>,

    /// Team acronym table with "Acronym" and "Full Name" columns.
    #[arg(long, value_name = "CSV")]
    pub teams: Option<PathBuf>,

    /// Historical team renames with "team_old" and "team_new" columns.
    #[arg(long = "team-mapping", value_name = "CSV", requires = "teams")]
    pub team_mapping: Option<PathBuf>,

    /// Output CSV (default: <STATS>_draft.csv next to the statistics file).
    #[arg(long, value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Also write the unmatched statistics rows to this CSV.
    #[arg(long, value_name = "CSV")]
    pub unmatched: Option<PathBuf>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    /// Match rows on this many worker threads.
    #[arg(long, value_name = "THREADS")]
    pub parallel: Option<NonZeroUsize>,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Player name as written in the statistics source.
    #[arg(long)]
    pub name: String,

    /// School name as written in the statistics source.
    #[arg(long)]
    pub school: String,

    /// Season year; without it nothing can match.
    #[arg(long)]
    pub year: Option<i32>,

    /// Draft records as a JSON array or CSV.
    #[arg(long, value_name = "JSON|CSV")]
    pub drafts: PathBuf,

    /// School alias table with "Old name" and "New name" columns.
    #[arg(long, value_name = "CSV")]
    pub aliases: Option<PathBuf>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Args)]
pub struct ThresholdArgs {
    /// Minimum name similarity (0-100) when the school matches exactly.
    #[arg(long = "name-threshold", default_value_t = 90.0, value_parser = parse_threshold)]
    pub name_threshold: f64,

    /// Minimum school similarity (0-100) when the name matches exactly.
    #[arg(long = "school-threshold", default_value_t = 90.0, value_parser = parse_threshold)]
    pub school_threshold: f64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl ThresholdArgs {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            name_threshold: self.name_threshold,
            school_threshold: self.school_threshold,
        }
    }
}

impl BuildArgs {
    pub fn to_request(&self) -> BuildRequest {
        BuildRequest {
            stats: self.stats.clone(),
            drafts: self.drafts.clone(),
            aliases: self.aliases.clone(),
            teams: self.teams.clone(),
            team_mapping: self.team_mapping.clone(),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| default_output(&self.stats)),
            unmatched: self.unmatched.clone(),
            options: BuildOptions {
                match_options: self.thresholds.match_options(),
                parallel: self.parallel,
            },
        }
    }
}

impl MatchArgs {
    pub fn to_request(&self) -> MatchRequest {
        MatchRequest {
            name: self.name.clone(),
            school: self.school.clone(),
            year: self.year,
            drafts: self.drafts.clone(),
            aliases: self.aliases.clone(),
            options: self.thresholds.match_options(),
        }
    }
}

fn default_output(stats: &Path) -> PathBuf {
    let stem = stats
        .file_stem()
        .map_or_else(|| "master".into(), |stem| stem.to_string_lossy());
    stats.with_file_name(format!("{stem}_draft.csv"))
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=100.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("{threshold} is outside 0-100"))
    }
}
