//! Predicate-based filtering over expense snapshots.
//!
//! Filtering is pure: it takes a snapshot of the collection and the filter
//! criteria and produces a new sequence without mutating or reordering the
//! input. Ordering is a separate, explicit step ([`sort_by_date_desc`]).

use crate::domain::calendar;
use crate::domain::models::expense::Expense;
use shared::ExpenseFilters;

/// Expenses satisfying every active criterion, in their original order.
pub fn filter_expenses(expenses: &[Expense], filters: &ExpenseFilters) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| matches_filters(expense, filters))
        .cloned()
        .collect()
}

/// Whether a single expense satisfies every active criterion.
pub fn matches_filters(expense: &Expense, filters: &ExpenseFilters) -> bool {
    if !filters.category.matches(expense.category) {
        return false;
    }

    if let Some(search) = filters.search.as_deref() {
        if !search.is_empty()
            && !expense
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }
    }

    calendar::is_in_range(expense.date, filters.date_from, filters.date_to)
}

/// Sort newest first. Ties on the date fall back to creation time and then
/// id, so the order is fully deterministic.
pub fn sort_by_date_desc(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    });
}
