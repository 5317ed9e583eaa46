//! Filesystem connection for the JSON expense store.

use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the single data file holding the serialized expense collection.
pub const EXPENSES_FILE: &str = "expenses.json";

/// JsonConnection manages the base data directory and the location of the
/// expense data file within it.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection rooted at `base_directory`, creating the
    /// directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();

        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)?;
            info!("Created data directory: {}", base_directory.display());
        }

        Ok(Self { base_directory })
    }

    /// Create a connection in the default data directory,
    /// `~/Documents/Expense Tracker` (falling back to the home directory when
    /// no Documents folder exists).
    pub fn new_default() -> Result<Self> {
        let documents_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        Self::new(documents_dir.join("Expense Tracker"))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the expense data file.
    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join(EXPENSES_FILE)
    }
}
