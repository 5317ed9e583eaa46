//! Export service domain logic for the expense tracker.
//!
//! Renders expense data as CSV and orchestrates writing it to disk. Callers
//! pass in the sequence to export (already filtered and sorted to taste);
//! rows come out in the order given.

use anyhow::Result;
use chrono::Local;
use log::{error, info};
use std::fs;
use std::path::PathBuf;

use crate::domain::calendar;
use crate::domain::models::expense::Expense;
use shared::{ExportDataResponse, ExportToPathResponse};

/// Header row of every export.
pub const CSV_HEADER: &str = "Date,Description,Category,Amount";

/// Export service that handles all export-related business logic.
#[derive(Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Render `expenses` as CSV. The description is always double-quoted with
    /// internal quotes doubled; the date uses the human-readable short form
    /// and the amount is plain decimal text.
    pub fn export_csv(&self, expenses: &[Expense]) -> ExportDataResponse {
        let mut csv_content = String::new();
        csv_content.push_str(CSV_HEADER);
        csv_content.push('\n');

        for expense in expenses {
            let row = format!(
                "{},\"{}\",{},{}\n",
                calendar::format_short_date(expense.date),
                expense.description.replace('"', "\"\""),
                expense.category,
                expense.amount,
            );
            csv_content.push_str(&row);
        }

        let filename = format!("expenses_{}.csv", Local::now().format("%Y%m%d"));

        info!(
            "Exported {} expenses as CSV ({} bytes) with filename: {}",
            expenses.len(),
            csv_content.len(),
            filename
        );

        ExportDataResponse {
            expense_count: expenses.len(),
            csv_content,
            filename,
        }
    }

    /// Write the CSV export to `custom_path`, or to the Documents folder
    /// (falling back to the home directory) when no path is given. Failures
    /// are reported in the response so the caller can surface them without
    /// unwinding.
    pub fn export_to_path(
        &self,
        expenses: &[Expense],
        custom_path: Option<&str>,
    ) -> Result<ExportToPathResponse> {
        let export = self.export_csv(expenses);

        let export_dir = match custom_path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => match dirs::document_dir().or_else(dirs::home_dir) {
                Some(dir) => dir,
                None => {
                    error!("Could not determine a default export directory");
                    return Ok(ExportToPathResponse {
                        success: false,
                        message: "Failed to determine export directory".to_string(),
                        file_path: String::new(),
                        expense_count: 0,
                    });
                }
            },
        };

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!(
                "Failed to create export directory {}: {}",
                export_dir.display(),
                e
            );
            return Ok(ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                expense_count: 0,
            });
        }

        let file_path = export_dir.join(&export.filename);
        match fs::write(&file_path, &export.csv_content) {
            Ok(()) => {
                let file_path = file_path.to_string_lossy().to_string();
                info!(
                    "Exported {} expenses to: {}",
                    export.expense_count, file_path
                );
                Ok(ExportToPathResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path),
                    file_path,
                    expense_count: export.expense_count,
                })
            }
            Err(e) => {
                error!("Failed to write export file {}: {}", file_path.display(), e);
                Ok(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    expense_count: 0,
                })
            }
        }
    }
}
