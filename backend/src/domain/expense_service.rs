//! Expense service domain logic for the expense tracker.
//!
//! The service owns the authoritative in-memory expense collection and keeps
//! it synchronized with an injected storage backend: every successful
//! mutation rewrites the full stored collection exactly once. Input
//! validation happens here, so no unvalidated record can reach storage.

use anyhow::Result;
use chrono::{Local, Utc};
use log::{error, warn};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::domain::commands::{CreateExpenseCommand, UpdateExpenseCommand};
use crate::domain::models::expense::Expense;
use crate::domain::{query, summary};
use crate::storage::ExpenseStorage;
use shared::{ExpenseFilters, ExpenseSummary};

/// Longest accepted expense description.
pub const MAX_DESCRIPTION_LEN: usize = 256;

/// Rejection of user-entered expense fields.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),
    #[error("description must be between 1 and 256 characters")]
    DescriptionLength,
}

/// Expense repository with an injected storage backend.
///
/// Constructed once per session and passed by reference to consumers; there
/// is no hidden global collection.
pub struct ExpenseService<S: ExpenseStorage> {
    store: S,
    expenses: Vec<Expense>,
}

impl<S: ExpenseStorage> ExpenseService<S> {
    /// Load the stored collection into memory. A failed load is logged and
    /// degrades to an empty collection, so a corrupt data file never takes
    /// the application down.
    pub fn new(store: S) -> Self {
        let expenses = match store.load() {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("Failed to load stored expenses, starting empty: {:#}", e);
                Vec::new()
            }
        };
        Self { store, expenses }
    }

    /// Snapshot of the current collection.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Record a new expense. The service assigns the id and both timestamps.
    pub fn add(&mut self, command: CreateExpenseCommand) -> Result<Expense> {
        validate_amount(command.amount)?;
        validate_description(&command.description)?;

        let now = Utc::now();
        let now_millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;

        let expense = Expense {
            id: Expense::generate_id(now_millis),
            amount: command.amount,
            category: command.category,
            description: command.description,
            date: command.date.unwrap_or_else(|| Local::now().date_naive()),
            created_at: now,
            updated_at: now,
        };

        self.expenses.push(expense.clone());
        self.persist()?;
        Ok(expense)
    }

    /// Merge `patch` over the expense with `id` and refresh its `updated_at`.
    /// An unknown id is a no-op reported as `Ok(None)`, not an error.
    pub fn update(&mut self, id: &str, patch: UpdateExpenseCommand) -> Result<Option<Expense>> {
        if let Some(amount) = patch.amount {
            validate_amount(amount)?;
        }
        if let Some(description) = patch.description.as_deref() {
            validate_description(description)?;
        }

        let Some(expense) = self.expenses.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(description) = patch.description {
            expense.description = description;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        expense.updated_at = Utc::now();

        let updated = expense.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Remove the expense with `id`. An unknown id is a no-op reported as
    /// `Ok(false)`; nothing is written in that case.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Filtered view of the collection; the underlying list is untouched.
    pub fn filtered(&self, filters: &ExpenseFilters) -> Vec<Expense> {
        query::filter_expenses(&self.expenses, filters)
    }

    /// Aggregate view over the full (unfiltered) collection.
    pub fn summary(&self) -> ExpenseSummary {
        summary::summarize(&self.expenses)
    }

    /// Rewrite the whole stored collection. The in-memory list can run ahead
    /// of disk only when this fails, and the caller sees the error then.
    fn persist(&self) -> Result<()> {
        if let Err(e) = self.store.save_all(&self.expenses) {
            error!(
                "Failed to persist {} expenses: {:#}",
                self.expenses.len(),
                e
            );
            return Err(e);
        }
        Ok(())
    }
}

fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveAmount(amount))
    }
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() || description.chars().count() > MAX_DESCRIPTION_LEN {
        Err(ValidationError::DescriptionLength)
    } else {
        Ok(())
    }
}
