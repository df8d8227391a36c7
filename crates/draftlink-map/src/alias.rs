//! Known school renames applied before comparing schools.

use std::collections::BTreeMap;

use crate::normalize::normalize_str;

/// Maps a normalized historical school name to its normalized current name.
///
/// Keys and values are normalized on insertion, so lookups take already
/// normalized text. When the same old name is inserted twice the later
/// entry replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::new();
        for (old, new) in pairs {
            table.insert(old.as_ref(), new.as_ref());
        }
        table
    }

    pub fn insert(&mut self, old_name: &str, new_name: &str) {
        self.entries
            .insert(normalize_str(old_name), normalize_str(new_name));
    }

    /// Returns the canonical name for `school`, or `school` itself when no
    /// alias is known.
    pub fn resolve<'a>(&'a self, school: &'a str) -> &'a str {
        self.entries.get(school).map_or(school, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_alias() {
        let table = AliasTable::from_pairs([("State College", "State Univ.")]);
        assert_eq!(table.resolve("state college"), "state university");
    }

    #[test]
    fn unknown_name_is_identity() {
        let table = AliasTable::from_pairs([("state college", "state university")]);
        assert_eq!(table.resolve("ohio state university"), "ohio state university");
        assert_eq!(AliasTable::new().resolve(""), "");
    }

    #[test]
    fn later_duplicate_wins() {
        let table = AliasTable::from_pairs([
            ("old tech", "first tech"),
            ("Old Tech", "second tech"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("old tech"), "second tech");
    }

    #[test]
    fn lookup_is_exact_not_fuzzy() {
        let table = AliasTable::from_pairs([("state college", "state university")]);
        assert_eq!(table.resolve("state colleges"), "state colleges");
    }
}
