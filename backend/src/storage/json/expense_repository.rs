//! # JSON Expense Repository
//!
//! Reads and writes the expense collection as a single JSON file. Every save
//! rewrites the full collection; writes go through a temp file and rename so
//! a crash mid-save cannot leave a half-written file behind.

use anyhow::{Context, Result};
use log::debug;
use std::fs;

use super::connection::JsonConnection;
use crate::domain::models::expense::Expense;
use crate::storage::traits::ExpenseStorage;

/// JSON-file-backed expense store.
#[derive(Clone)]
pub struct ExpenseRepository {
    connection: JsonConnection,
}

impl ExpenseRepository {
    /// Create a new JSON expense repository.
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ExpenseStorage for ExpenseRepository {
    fn load(&self) -> Result<Vec<Expense>> {
        let path = self.connection.expenses_file_path();

        if !path.exists() {
            debug!("No expense data file at {}, treating as empty", path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let expenses: Vec<Expense> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        debug!("Loaded {} expenses from {}", expenses.len(), path.display());
        Ok(expenses)
    }

    fn save_all(&self, expenses: &[Expense]) -> Result<()> {
        let path = self.connection.expenses_file_path();
        let json = serde_json::to_string_pretty(expenses)?;

        // Atomic write pattern: write to temp file, then rename.
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("failed to move {} into place", temp_path.display()))?;

        debug!("Saved {} expenses to {}", expenses.len(), path.display());
        Ok(())
    }
}
