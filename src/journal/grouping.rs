//! Date-keyed partitioning of the journal for display.

use chrono::NaiveDate;

use crate::domain::ExpenseRecord;
use crate::journal::Journal;

/// One display bucket: every record logged on the same calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup<'a> {
    pub date: NaiveDate,
    pub records: Vec<&'a ExpenseRecord>,
}

/// Partitions the journal into buckets keyed by exact date equality.
///
/// Bucket order follows the first encounter of each date, and records keep
/// their relative order within a bucket. Recomputed on every call.
pub fn group_by_date(journal: &Journal) -> Vec<DateGroup<'_>> {
    let mut groups: Vec<DateGroup<'_>> = Vec::new();
    for record in journal.iter() {
        match groups.iter_mut().find(|group| group.date == record.date) {
            Some(group) => group.records.push(record),
            None => groups.push(DateGroup {
                date: record.date,
                records: vec![record],
            }),
        }
    }
    groups
}

/// The flattened grouped order, as rendered by `expense list`. Listing
/// indexes shown to the user resolve against this ordering.
pub fn display_order(journal: &Journal) -> Vec<&ExpenseRecord> {
    group_by_date(journal)
        .into_iter()
        .flat_map(|group| group.records)
        .collect()
}
