//! # Storage Module
//!
//! Persistence for the expense collection.
//!
//! The domain layer only sees the [`ExpenseStorage`] trait; the backing
//! implementation can be swapped (JSON file on disk, in-memory fake for
//! tests) without touching business logic.

pub mod json;
pub mod memory;
pub mod traits;

pub use json::{ExpenseRepository, JsonConnection};
pub use memory::MemoryExpenseStore;
pub use traits::ExpenseStorage;
