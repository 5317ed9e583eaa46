//! # Expense Tracker Backend
//!
//! Contains all non-UI logic for the expense tracker application.
//!
//! The crate is organized in two layers:
//! - **Domain**: business logic (expense CRUD, filtering, summaries, export)
//! - **Storage**: persistence of the expense collection (JSON file, in-memory)
//!
//! The backend is UI-agnostic: forms, charts and navigation live elsewhere
//! and call into `ExpenseService` to mutate state and derive views.

pub mod domain;
pub mod storage;

pub use domain::expense_service::ExpenseService;
pub use domain::export_service::ExportService;
pub use storage::{ExpenseRepository, ExpenseStorage, JsonConnection, MemoryExpenseStore};
