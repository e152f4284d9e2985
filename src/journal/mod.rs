//! The in-memory expense journal and its derived views.

pub mod grouping;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ExpenseRecord;

/// Insertion-ordered sequence of expense records.
///
/// Serializes transparently as a bare JSON array: the stored layout carries no
/// wrapper object and no version field. Records are never edited in place; a
/// removal rewrites the whole sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    records: Vec<ExpenseRecord>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its identifier. Uniqueness of the id is
    /// validated upstream by [`crate::core::services::RecordService`].
    pub fn append(&mut self, record: ExpenseRecord) -> Uuid {
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Removes the record with the given id, returning it, or `None` when no
    /// record matches. The sequence is untouched in the `None` case.
    pub fn remove(&mut self, id: Uuid) -> Option<ExpenseRecord> {
        let position = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(position))
    }

    pub fn get(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record_on(day: u32) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            "Food",
            10.0,
        )
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut journal = Journal::new();
        let first = journal.append(record_on(1));
        let second = journal.append(record_on(2));
        let ids: Vec<_> = journal.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn remove_returns_the_matching_record() {
        let mut journal = Journal::new();
        let keep = journal.append(record_on(1));
        let gone = journal.append(record_on(2));

        let removed = journal.remove(gone).expect("record exists");
        assert_eq!(removed.id, gone);
        assert_eq!(journal.len(), 1);
        assert!(journal.get(keep).is_some());
        assert!(journal.get(gone).is_none());
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut journal = Journal::new();
        journal.append(record_on(1));
        let before = journal.clone();

        assert!(journal.remove(Uuid::new_v4()).is_none());
        assert_eq!(journal, before);
    }
}
