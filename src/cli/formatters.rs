//! Rendering helpers for journal records.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::ExpenseRecord;

/// Renders a calendar day the way journal dates are keyed (YYYY-MM-DD).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Renders an amount with two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Abbreviated identifier for listings.
pub fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// One-line summary used by the grouped listing.
pub fn record_line(index: usize, record: &ExpenseRecord) -> String {
    let mut line = format!(
        "{:>3}. {:>10}  {}",
        index,
        format_amount(record.amount),
        record.category
    );
    if !record.note.is_empty() {
        line.push_str("  ");
        line.push_str(&record.note);
    }
    line
}

/// Multi-line detail rendering for `expense show`.
pub fn record_detail(record: &ExpenseRecord) -> String {
    let mut lines = vec![
        format!("Id:       {}", record.id),
        format!("Date:     {}", format_date(record.date)),
    ];
    if let Some(from) = &record.from {
        lines.push(format!("From:     {}", from));
    }
    if let Some(to) = &record.to {
        lines.push(format!("To:       {}", to));
    }
    if let Some(app) = &record.used_app {
        lines.push(format!("App:      {}", app));
    }
    if let Some(account) = &record.used_account {
        lines.push(format!("Account:  {}", account));
    }
    lines.push(format!("Category: {}", record.category));
    lines.push(format!("Amount:   {}", format_amount(record.amount)));
    if !record.note.is_empty() {
        lines.push(format!("Note:     {}", record.note));
    }
    lines.join("\n")
}
