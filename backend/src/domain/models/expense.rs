//! Domain model for an expense record.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::ExpenseCategory;
use std::time::{SystemTime, UNIX_EPOCH};

/// A single recorded expense.
///
/// The serialized form is the persisted data format: `date` is an ISO
/// `YYYY-MM-DD` string and the two timestamps are ISO 8601, stored under
/// `createdAt` / `updatedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Positive amount in the user's currency.
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    /// Transaction date (user-editable, no time component).
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation; never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Generate a unique expense ID from the creation timestamp.
    /// Format: expense-<timestamp_ms>-<random_suffix>
    /// Example: expense-1625846400123-af3c
    pub fn generate_id(timestamp_ms: u64) -> String {
        let random_suffix = Self::generate_random_suffix(4);
        format!("expense-{}-{}", timestamp_ms, random_suffix)
    }

    /// Generate a random hex suffix for expense IDs.
    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix_and_timestamp() {
        let id = Expense::generate_id(1625846400123);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "expense");
        assert_eq!(parts[1], "1625846400123");
        assert!(!parts[2].is_empty());
    }

    #[test]
    fn serializes_with_camel_case_timestamps_and_plain_date() {
        let expense = Expense {
            id: "expense-1-ab".to_string(),
            amount: 42.5,
            category: ExpenseCategory::Food,
            description: "Lunch".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["date"], "2024-01-05");
        assert_eq!(value["category"], "Food");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());

        let back: Expense = serde_json::from_value(value).unwrap();
        assert_eq!(back, expense);
    }
}
