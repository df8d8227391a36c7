//! Resolution of statistics team codes to full school names.
//!
//! Statistics sources identify schools by acronym. The directory resolves an
//! acronym directly from the teams table, or through the old-to-new team
//! mapping when the acronym is a historical one.

use std::collections::BTreeMap;

use crate::normalize::normalize_str;

#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    /// Trimmed acronym to normalized full name; first row per acronym wins.
    acronyms: BTreeMap<String, String>,
    /// Normalized full names in load order.
    full_names: Vec<String>,
    /// Normalized (old, new) team names in load order.
    renames: Vec<(String, String)>,
}

impl TeamDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_team(&mut self, acronym: &str, full_name: &str) {
        let full_name = normalize_str(full_name);
        self.acronyms
            .entry(acronym.trim().to_string())
            .or_insert_with(|| full_name.clone());
        self.full_names.push(full_name);
    }

    pub fn add_rename(&mut self, old_name: &str, new_name: &str) {
        self.renames
            .push((normalize_str(old_name), normalize_str(new_name)));
    }

    /// Full normalized school name for a statistics team value.
    ///
    /// Tries the acronym table first; acronym lookup is exact and
    /// case-sensitive after trimming. Failing that, the first rename whose
    /// old name equals the normalized team value supplies a new name. A full
    /// name equal to it wins, otherwise the first full name containing it.
    pub fn full_name(&self, team: &str) -> Option<&str> {
        if let Some(full_name) = self.acronyms.get(team.trim()) {
            return Some(full_name.as_str());
        }
        let team = normalize_str(team);
        let (_, new_name) = self.renames.iter().find(|(old, _)| *old == team)?;
        if new_name.is_empty() {
            return None;
        }
        self.full_names
            .iter()
            .find(|full_name| *full_name == new_name)
            .or_else(|| {
                self.full_names
                    .iter()
                    .find(|full_name| full_name.contains(new_name.as_str()))
            })
            .map(String::as_str)
    }

    pub fn team_count(&self) -> usize {
        self.full_names.len()
    }

    pub fn rename_count(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full_names.is_empty()
    }
}
