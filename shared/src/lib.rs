use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

/// Closed set of expense categories.
///
/// The variant names double as the wire/storage representation, so renaming a
/// variant is a breaking change to the persisted data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Bills,
    Other,
}

impl ExpenseCategory {
    /// Every category, in display order.
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Bills,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category criterion for filtering. `All` places no restriction and is the
/// default, so a freshly constructed filter set matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ExpenseCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ExpenseCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

/// Filter criteria for browsing expenses.
///
/// All supplied criteria must hold for an expense to be included (they are
/// ANDed together). Date bounds are calendar dates and inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseFilters {
    pub category: CategoryFilter,
    /// Case-insensitive substring match against the description.
    pub search: Option<String>,
    /// Inclusive lower bound on the transaction date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the transaction date.
    pub date_to: Option<NaiveDate>,
}

/// One entry of the top-categories ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: ExpenseCategory,
    pub amount: f64,
    /// Share of the overall total, in percent. Defined as 0 when the total
    /// amount is 0.
    pub percentage: f64,
}

/// Aggregated view over the full (unfiltered) expense collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Sum of all expense amounts.
    pub total_expenses: f64,
    /// Sum restricted to the current calendar month.
    pub monthly_expenses: f64,
    /// Per-category totals; categories without expenses are absent, not zero.
    pub category_totals: BTreeMap<ExpenseCategory, f64>,
    /// Largest categories by spend, capped at five entries.
    pub top_categories: Vec<CategorySummary>,
}

/// CSV export rendered in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub csv_content: String,
    pub filename: String,
    pub expense_count: usize,
}

/// Outcome of writing an export file to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub expense_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_as_plain_string() {
        let json = serde_json::to_string(&ExpenseCategory::Transportation).unwrap();
        assert_eq!(json, "\"Transportation\"");

        let parsed: ExpenseCategory = serde_json::from_str("\"Bills\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Bills);
    }

    #[test]
    fn category_display_matches_wire_format() {
        for category in ExpenseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn all_lists_every_category_once() {
        let mut seen: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn default_filters_match_everything() {
        let filters = ExpenseFilters::default();
        assert_eq!(filters.category, CategoryFilter::All);
        assert!(filters.search.is_none());
        assert!(filters.date_from.is_none());
        assert!(filters.date_to.is_none());
        for category in ExpenseCategory::ALL {
            assert!(filters.category.matches(category));
        }
    }

    #[test]
    fn only_filter_matches_single_category() {
        let filter = CategoryFilter::Only(ExpenseCategory::Food);
        assert!(filter.matches(ExpenseCategory::Food));
        assert!(!filter.matches(ExpenseCategory::Bills));
    }
}
