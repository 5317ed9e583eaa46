//! Test utilities for storage-backed tests.
//!
//! RAII-based cleanup: the temporary data directory is removed when the
//! environment is dropped, even if a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::JsonConnection;
use super::expense_repository::ExpenseRepository;

/// Test environment with a temporary data directory that is cleaned up
/// automatically when dropped.
pub struct TestEnvironment {
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed.
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Test helper bundling a fresh environment with a repository over it.
pub struct TestHelper {
    pub env: TestEnvironment,
    pub expense_repo: ExpenseRepository,
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let expense_repo = ExpenseRepository::new(env.connection.clone());
        Ok(Self { env, expense_repo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_cleans_up_on_drop() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
