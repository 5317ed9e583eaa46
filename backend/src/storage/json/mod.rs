//! # JSON Storage Module
//!
//! File-based storage implementation for the expense tracker: the whole
//! collection lives in a single `expenses.json` file as a JSON array.
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "id": "expense-1704445200000-af3c",
//!     "amount": 42.5,
//!     "category": "Food",
//!     "description": "Groceries",
//!     "date": "2024-01-05",
//!     "createdAt": "2024-01-05T10:30:00Z",
//!     "updatedAt": "2024-01-05T10:30:00Z"
//!   }
//! ]
//! ```
//!
//! There is no schema versioning; readers tolerate a missing file (empty
//! collection) and surface malformed content as an error.

pub mod connection;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use expense_repository::ExpenseRepository;
