//! In-memory expense store.
//!
//! Nothing survives the process; the main use is as a fake storage backend
//! in service tests, where it also counts `save_all` calls so tests can
//! assert the one-save-per-mutation contract.

use anyhow::Result;
use std::sync::{Arc, Mutex};

use crate::domain::models::expense::Expense;
use crate::storage::traits::ExpenseStorage;

#[derive(Default)]
struct MemoryInner {
    expenses: Vec<Expense>,
    save_count: usize,
}

/// Expense store backed by process memory. Clones share the same underlying
/// collection, so a test can keep a handle after handing the store to a
/// service.
#[derive(Clone, Default)]
pub struct MemoryExpenseStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-populated collection.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryInner {
                expenses,
                save_count: 0,
            })),
        }
    }

    /// Number of `save_all` calls observed so far.
    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap().save_count
    }

    /// Copy of the currently stored collection.
    pub fn snapshot(&self) -> Vec<Expense> {
        self.inner.lock().unwrap().expenses.clone()
    }
}

impl ExpenseStorage for MemoryExpenseStore {
    fn load(&self) -> Result<Vec<Expense>> {
        Ok(self.inner.lock().unwrap().expenses.clone())
    }

    fn save_all(&self, expenses: &[Expense]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.expenses = expenses.to_vec();
        inner.save_count += 1;
        Ok(())
    }
}
