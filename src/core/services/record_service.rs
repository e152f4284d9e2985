//! Business logic helpers for managing journal records.

use uuid::Uuid;

use crate::domain::ExpenseRecord;
use crate::errors::{JournalError, Result};
use crate::journal::Journal;

/// Provides validated CRUD helpers for journal records.
pub struct RecordService;

impl RecordService {
    /// Appends a new record and returns its identifier.
    ///
    /// Identifier uniqueness is the journal's one invariant; a duplicate id is
    /// rejected without touching the sequence.
    pub fn add(journal: &mut Journal, record: ExpenseRecord) -> Result<Uuid> {
        if journal.get(record.id).is_some() {
            return Err(JournalError::DuplicateId(record.id));
        }
        Ok(journal.append(record))
    }

    /// Removes the record identified by `id`, returning the removed instance.
    pub fn remove(journal: &mut Journal, id: Uuid) -> Result<ExpenseRecord> {
        journal.remove(id).ok_or(JournalError::RecordNotFound(id))
    }

    /// Returns a snapshot of the journal's records in insertion order.
    pub fn list(journal: &Journal) -> Vec<&ExpenseRecord> {
        journal.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> ExpenseRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ExpenseRecord::new(date, "Food", 42.0)
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut journal = Journal::new();
        let record = sample_record();
        let duplicate = record.clone();
        RecordService::add(&mut journal, record).unwrap();

        let err = RecordService::add(&mut journal, duplicate)
            .expect_err("duplicate id must be rejected");
        assert!(matches!(err, JournalError::DuplicateId(_)));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn remove_fails_for_missing_record() {
        let mut journal = Journal::new();
        journal.append(sample_record());

        let err = RecordService::remove(&mut journal, Uuid::new_v4())
            .expect_err("remove must fail for unknown id");
        assert!(matches!(err, JournalError::RecordNotFound(_)));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn remove_returns_deleted_record() {
        let mut journal = Journal::new();
        let record = sample_record();
        let record_id = record.id;
        RecordService::add(&mut journal, record).unwrap();

        let removed = RecordService::remove(&mut journal, record_id).unwrap();
        assert_eq!(removed.id, record_id);
        assert!(journal.get(record_id).is_none());
    }
}
