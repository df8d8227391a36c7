//! Row types for the statistics table, the draft history and match results.

use serde::{Deserialize, Serialize};

/// One player-season statistics row.
///
/// `cells` holds every original value in header order; the matcher only
/// looks at `name`, `team` and `year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub name: Option<String>,
    pub team: Option<String>,
    /// Season year; `None` when the cell is missing or not an integer.
    pub year: Option<i32>,
    pub cells: Vec<String>,
}

/// Statistics rows in load order, with the headers they were read under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatTable {
    pub headers: Vec<String>,
    pub records: Vec<StatRecord>,
}

impl StatTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: StatRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One draft event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    #[serde(rename = "Player Name")]
    pub player_name: String,
    #[serde(rename = "Drafted From")]
    pub drafted_from: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Round")]
    pub round: i32,
    #[serde(rename = "Pick")]
    pub pick: i32,
    #[serde(rename = "Drafted By")]
    pub drafted_by: String,
}

/// Outcome of matching one statistics row against the draft pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    Matched(&'a DraftRecord),
    NoMatch,
}

impl<'a> MatchResult<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn record(&self) -> Option<&'a DraftRecord> {
        match *self {
            Self::Matched(record) => Some(record),
            Self::NoMatch => None,
        }
    }
}

/// Draft columns appended to every output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFields {
    #[serde(rename = "Round")]
    pub round: Option<i32>,
    #[serde(rename = "Pick")]
    pub pick: Option<i32>,
    #[serde(rename = "Drafted By")]
    pub drafted_by: Option<String>,
    #[serde(rename = "Drafted From")]
    pub drafted_from: Option<String>,
    #[serde(rename = "Drafted?")]
    pub drafted: bool,
}

impl DraftFields {
    pub fn undrafted() -> Self {
        Self {
            round: None,
            pick: None,
            drafted_by: None,
            drafted_from: None,
            drafted: false,
        }
    }

    pub fn from_result(result: &MatchResult<'_>) -> Self {
        match result {
            MatchResult::Matched(record) => Self {
                round: Some(record.round),
                pick: Some(record.pick),
                drafted_by: Some(record.drafted_by.clone()),
                drafted_from: Some(record.drafted_from.clone()),
                drafted: true,
            },
            MatchResult::NoMatch => Self::undrafted(),
        }
    }
}
