//! Domain model for logged expenses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged transaction: date, parties, tags, amount, and note.
///
/// Serialized field names follow the camelCase layout of pre-existing journal
/// files (`usedApp`, `usedAccount`), so journals written by earlier tooling
/// keep parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_app: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_account: Option<String>,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub note: String,
}

impl ExpenseRecord {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            from: None,
            to: None,
            used_app: None,
            used_account: None,
            category: category.into(),
            amount,
            note: String::new(),
        }
    }

    pub fn with_parties(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn with_tags(mut self, used_app: Option<String>, used_account: Option<String>) -> Self {
        self.used_app = used_app;
        self.used_account = used_account;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn new_record_defaults_optional_fields() {
        let record = ExpenseRecord::new(sample_date(), "Food", 120.5);
        assert!(record.from.is_none());
        assert!(record.to.is_none());
        assert!(record.used_app.is_none());
        assert!(record.used_account.is_none());
        assert!(record.note.is_empty());
    }

    #[test]
    fn serializes_tag_fields_in_camel_case() {
        let record = ExpenseRecord::new(sample_date(), "Travel", 45.0)
            .with_tags(Some("Gpay".into()), Some("HDFC-0931".into()));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"usedApp\":\"Gpay\""));
        assert!(json.contains("\"usedAccount\":\"HDFC-0931\""));
        assert!(json.contains("\"date\":\"2024-01-15\""));
    }

    #[test]
    fn deserializes_records_missing_optional_fields() {
        let json = r#"{
            "id": "4f2c8a9e-6f0b-4c57-9a44-1df0a0d7c9aa",
            "date": "2024-02-01",
            "category": "Essentials",
            "amount": 300.0
        }"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, "Essentials");
        assert!(record.used_app.is_none());
        assert!(record.note.is_empty());
    }
}
