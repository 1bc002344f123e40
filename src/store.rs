//! On-disk persistence of the expense list.
//!
//! The whole list is stored as a single pretty-printed JSON array. Every `save` rewrites the entire
//! file in place. There is no atomic rename and no backup, so a crash during a write can leave a
//! truncated file behind.

use crate::error::{ExpenseError, ExpenseResult};
use crate::model::Expenses;
use crate::utils;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads and saves `Expenses` at a single file path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full expense list. A missing file is an empty list, not an error.
    ///
    /// # Errors
    /// - `ExpenseError::Io` if the file exists but cannot be read.
    /// - `ExpenseError::Json` if the file is not a JSON array of expense records.
    pub async fn load(&self) -> ExpenseResult<Expenses> {
        let content = utils::read_if_exists(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;
        let Some(content) = content else {
            debug!("No expenses file at '{}'", self.path.display());
            return Ok(Expenses::default());
        };
        let expenses: Expenses =
            serde_json::from_str(&content).map_err(|source| ExpenseError::Json {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            "Loaded {} expenses from '{}'",
            expenses.len(),
            self.path.display()
        );
        Ok(expenses)
    }

    /// Overwrites the file with the full, pretty-printed expense list.
    ///
    /// # Errors
    /// - `ExpenseError::Io` if the file cannot be written. There is no retry.
    pub async fn save(&self, expenses: &Expenses) -> ExpenseResult<()> {
        let data = utils::to_json_pretty(expenses).map_err(|source| ExpenseError::Json {
            path: self.path.clone(),
            source,
        })?;
        utils::write(&self.path, data)
            .await
            .map_err(|source| self.io_error(source))?;
        debug!(
            "Saved {} expenses to '{}'",
            expenses.len(),
            self.path.display()
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> ExpenseError {
        ExpenseError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
