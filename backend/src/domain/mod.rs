//! # Domain Module
//!
//! Business logic for the expense tracker.
//!
//! ## Module Organization
//!
//! - **expense_service**: core expense CRUD, backed by injected storage
//! - **query**: predicate-based filtering over expense snapshots
//! - **summary**: pure aggregation (totals, monthly totals, top categories)
//! - **export_service**: CSV export of expense data
//! - **calendar**: date helpers for month bucketing and range checks
//! - **money**: currency formatting and parsing helpers
//!
//! ## Business Rules
//!
//! - Expense amounts must be greater than zero
//! - Descriptions must be non-empty and at most 256 characters
//! - Every mutation rewrites the whole stored collection
//! - Filtering never reorders; sorting is an explicit caller step

pub mod calendar;
pub mod commands;
pub mod expense_service;
pub mod export_service;
pub mod models;
pub mod money;
pub mod query;
pub mod summary;
