//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::expense::Expense;

/// Interface for persisting the expense collection.
///
/// The whole collection is the unit of persistence: `save_all` always
/// rewrites the complete list, and there is no partial or incremental write.
///
/// Implementations do not coordinate concurrent writers. The expense tracker
/// runs in a single logical thread of control, so callers must serialize
/// mutations themselves if they ever share a store across threads or
/// processes; without that, the last write wins.
pub trait ExpenseStorage: Send + Sync {
    /// Load the stored collection. A missing backing store yields an empty
    /// collection, not an error; unreadable or corrupt data is an error for
    /// the caller to degrade as it sees fit.
    fn load(&self) -> Result<Vec<Expense>>;

    /// Serialize and overwrite the stored collection.
    fn save_all(&self, expenses: &[Expense]) -> Result<()>;
}
