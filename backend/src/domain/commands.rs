//! Command payloads accepted by the expense service.
use chrono::NaiveDate;
use shared::ExpenseCategory;

/// Request to record a new expense. The service assigns the id and
/// timestamps; callers only supply user-entered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateExpenseCommand {
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    /// Transaction date; defaults to today when not provided.
    pub date: Option<NaiveDate>,
}

/// Partial update of an existing expense. Fields left as `None` keep their
/// current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateExpenseCommand {
    pub amount: Option<f64>,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}
