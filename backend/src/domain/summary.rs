//! Pure aggregation over the full expense collection.
//!
//! Every function here takes an explicit snapshot and holds no state. The
//! wall-clock variants (`current_month_total`, `summarize`) resolve "now"
//! at call time; tests pin the clock through the `_on` variants.

use chrono::{Local, NaiveDate};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::calendar;
use crate::domain::models::expense::Expense;
use shared::{CategorySummary, ExpenseCategory, ExpenseSummary};

/// How many categories the summary ranking keeps.
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Sum of all expense amounts.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum restricted to the current calendar month.
pub fn current_month_total(expenses: &[Expense]) -> f64 {
    current_month_total_on(expenses, Local::now().date_naive())
}

/// Sum restricted to `today`'s calendar month.
pub fn current_month_total_on(expenses: &[Expense], today: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| calendar::is_in_month(e.date, today))
        .map(|e| e.amount)
        .sum()
}

/// Per-category totals. Categories with no expenses are absent from the map.
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<ExpenseCategory, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Top `n` categories by spend, descending. Equal amounts are ordered by
/// category name ascending, so the ranking never depends on insertion order.
pub fn top_categories(expenses: &[Expense], n: usize) -> Vec<CategorySummary> {
    let total = total_amount(expenses);
    let mut ranked: Vec<CategorySummary> = category_totals(expenses)
        .into_iter()
        .map(|(category, amount)| CategorySummary {
            category,
            amount,
            percentage: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    ranked.truncate(n);
    ranked
}

/// Full aggregate view of the collection, evaluated against today's date.
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    summarize_on(expenses, Local::now().date_naive())
}

/// Full aggregate view of the collection, with the clock pinned to `today`.
pub fn summarize_on(expenses: &[Expense], today: NaiveDate) -> ExpenseSummary {
    ExpenseSummary {
        total_expenses: total_amount(expenses),
        monthly_expenses: current_month_total_on(expenses, today),
        category_totals: category_totals(expenses),
        top_categories: top_categories(expenses, TOP_CATEGORY_LIMIT),
    }
}
