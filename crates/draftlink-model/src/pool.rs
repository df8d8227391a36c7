//! Draft records grouped by year.
//!
//! Records keep their load order within each year. That order is the
//! tie-break when more than one record in a year qualifies as a match, so
//! the pool never sorts or deduplicates.

use std::collections::BTreeMap;

use crate::records::DraftRecord;

#[derive(Debug, Clone, Default)]
pub struct DraftPool {
    records: Vec<DraftRecord>,
    by_year: BTreeMap<i32, Vec<usize>>,
}

impl DraftPool {
    pub fn new(records: Vec<DraftRecord>) -> Self {
        let mut by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            by_year.entry(record.year).or_default().push(index);
        }
        Self { records, by_year }
    }

    /// All records in load order.
    pub fn records(&self) -> &[DraftRecord] {
        &self.records
    }

    /// Records drafted in `year`, in load order.
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &DraftRecord> + '_ {
        self.by_year
            .get(&year)
            .into_iter()
            .flatten()
            .map(|&index| &self.records[index])
    }

    pub fn year_len(&self, year: i32) -> usize {
        self.by_year.get(&year).map_or(0, Vec::len)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<DraftRecord> for DraftPool {
    fn from_iter<T: IntoIterator<Item = DraftRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
